//! # Core Module
//!
//! 애플리케이션 조립(의존성 주입)을 담당합니다.
//!
//! ### [`container`] - 서비스 컨테이너
//! - **생성자 주입**: `Database` → 저장소 → 서비스 순으로 명시적으로 연결
//! - **actix 통합**: 서비스를 `web::Data`로 감싸 핸들러에 전달
//! - **테스트 지원**: mock 저장소로 같은 컨테이너를 구성

pub mod container;
