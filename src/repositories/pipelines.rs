//! 참조 해석(populate)용 집계 파이프라인 단계
//!
//! `blogs.author`, `comments.author`를 `users`에서 `{_id, username}`만 가져와
//! 단일 문서로 치환합니다. 대상 사용자가 없으면 `author` 필드가 제거되어
//! 읽기 뷰에서 `None`이 됩니다.
//!
//! `localField`와 `pipeline`을 함께 쓰는 형태는 MongoDB 5.0 이상에서만 동작하므로
//! `let` + `$expr` 상관 서브쿼리(3.6 이상)로 작성합니다.

use mongodb::bson::{doc, Document};

use crate::db::Database;

/// `author` 참조를 `{_id, username}` 요약으로 치환하는 단계들
pub fn resolve_author() -> Vec<Document> {
    vec![
        doc! {
            "$lookup": {
                "from": Database::USERS,
                "let": { "author_id": "$author" },
                "pipeline": [
                    { "$match": { "$expr": { "$eq": ["$_id", "$$author_id"] } } },
                    { "$project": { "_id": 1, "username": 1 } },
                ],
                "as": "author",
            }
        },
        doc! {
            "$unwind": {
                "path": "$author",
                "preserveNullAndEmptyArrays": true,
            }
        },
    ]
}

/// `$match` 단계 뒤에 작성자 해석 단계를 붙인 파이프라인
pub fn match_with_author(filter: Document) -> Vec<Document> {
    let mut pipeline = vec![doc! { "$match": filter }];
    pipeline.extend(resolve_author());
    pipeline
}
