use byline_core::{
    Article, ArticleId, Author, AuthorId, ImmutableFieldError, Magazine, MagazineId,
    ValidationError,
};
use uuid::Uuid;

#[test]
fn author_construction_requires_non_whitespace_name() {
    let author = Author::new("Jane Doe").unwrap();
    assert_eq!(author.name(), "Jane Doe");
    assert!(!author.id().as_uuid().is_nil());

    assert_eq!(
        Author::new("").unwrap_err(),
        ValidationError::AuthorNameEmpty
    );
    assert_eq!(
        Author::new("   \t").unwrap_err(),
        ValidationError::AuthorNameEmpty
    );
}

#[test]
fn author_name_is_immutable() {
    let mut author = Author::new("Jane Doe").unwrap();
    let err = author.set_name("Janet Doe").unwrap_err();
    assert_eq!(
        err,
        ImmutableFieldError {
            entity: "author",
            field: "name",
        }
    );
    assert_eq!(author.name(), "Jane Doe");
}

#[test]
fn magazine_name_bounds_are_inclusive_character_counts() {
    assert_eq!(
        Magazine::new("V", "Fashion").unwrap_err(),
        ValidationError::MagazineNameLength { chars: 1 }
    );
    assert_eq!(Magazine::new("Vo", "Fashion").unwrap().name(), "Vo");
    assert_eq!(
        Magazine::new("Sixteen Charssss", "Fashion").unwrap().name(),
        "Sixteen Charssss"
    );
    assert_eq!(
        Magazine::new("Seventeen Charsss", "Fashion").unwrap_err(),
        ValidationError::MagazineNameLength { chars: 17 }
    );

    // Two scalar values, six UTF-8 bytes: counted as characters, not bytes.
    assert_eq!(Magazine::new("日本", "Travel").unwrap().name(), "日本");
}

#[test]
fn magazine_category_must_be_non_empty() {
    assert_eq!(
        Magazine::new("Vogue", "").unwrap_err(),
        ValidationError::MagazineCategoryEmpty
    );

    let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();
    assert_eq!(
        magazine.set_category("").unwrap_err(),
        ValidationError::MagazineCategoryEmpty
    );
    assert_eq!(magazine.category(), "Fashion");

    magazine.set_category("Culture").unwrap();
    assert_eq!(magazine.category(), "Culture");
}

#[test]
fn magazine_construction_reports_the_first_failing_field() {
    // Name is validated before category.
    assert_eq!(
        Magazine::new("X", "").unwrap_err(),
        ValidationError::MagazineNameLength { chars: 1 }
    );
}

#[test]
fn magazine_rename_validates_and_keeps_prior_value_on_failure() {
    let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();
    assert_eq!(
        magazine.set_name("V").unwrap_err(),
        ValidationError::MagazineNameLength { chars: 1 }
    );
    assert_eq!(magazine.name(), "Vogue");

    magazine.set_name("Vogue Paris").unwrap();
    assert_eq!(magazine.name(), "Vogue Paris");
}

#[test]
fn article_title_bounds_are_inclusive_character_counts() {
    let author = AuthorId::from_uuid(Uuid::new_v4());
    let magazine = MagazineId::from_uuid(Uuid::new_v4());

    assert_eq!(
        Article::new(author, magazine, "Tiny").unwrap_err(),
        ValidationError::ArticleTitleLength { chars: 4 }
    );
    assert_eq!(
        Article::new(author, magazine, "Tides").unwrap().title(),
        "Tides"
    );
    assert_eq!(
        Article::new(author, magazine, "x".repeat(50))
            .unwrap()
            .title()
            .chars()
            .count(),
        50
    );
    assert_eq!(
        Article::new(author, magazine, "x".repeat(51)).unwrap_err(),
        ValidationError::ArticleTitleLength { chars: 51 }
    );
}

#[test]
fn article_title_is_immutable() {
    let author = AuthorId::from_uuid(Uuid::new_v4());
    let magazine = MagazineId::from_uuid(Uuid::new_v4());
    let mut article = Article::new(author, magazine, "Fall Lines Return").unwrap();

    let err = article.set_title("Spring Lines Return").unwrap_err();
    assert_eq!(
        err,
        ImmutableFieldError {
            entity: "article",
            field: "title",
        }
    );
    assert_eq!(article.title(), "Fall Lines Return");
}

#[test]
fn with_id_rejects_the_nil_uuid() {
    assert_eq!(
        Author::with_id(AuthorId::from_uuid(Uuid::nil()), "Jane").unwrap_err(),
        ValidationError::NilId
    );
    assert_eq!(
        Magazine::with_id(MagazineId::from_uuid(Uuid::nil()), "Vogue", "Fashion").unwrap_err(),
        ValidationError::NilId
    );
    assert_eq!(
        Article::with_id(
            ArticleId::from_uuid(Uuid::nil()),
            AuthorId::from_uuid(Uuid::new_v4()),
            MagazineId::from_uuid(Uuid::new_v4()),
            "Fall Lines Return",
        )
        .unwrap_err(),
        ValidationError::NilId
    );
}

#[test]
fn entity_serialization_uses_expected_wire_fields() {
    let magazine_id =
        MagazineId::from_uuid(Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap());
    let magazine = Magazine::with_id(magazine_id, "Vogue", "Fashion").unwrap();

    let json = serde_json::to_value(&magazine).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["name"], "Vogue");
    assert_eq!(json["category"], "Fashion");

    let decoded: Magazine = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, magazine);

    let author_id =
        AuthorId::from_uuid(Uuid::parse_str("22222222-3333-4444-8555-666666666666").unwrap());
    let article_id =
        ArticleId::from_uuid(Uuid::parse_str("33333333-4444-4555-8666-777777777777").unwrap());
    let article =
        Article::with_id(article_id, author_id, magazine_id, "Fall Lines Return").unwrap();

    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["id"], "33333333-4444-4555-8666-777777777777");
    assert_eq!(json["author"], "22222222-3333-4444-8555-666666666666");
    assert_eq!(json["magazine"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["title"], "Fall Lines Return");

    let decoded: Article = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, article);
}

#[test]
fn deserialization_revalidates_fields() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "V",
        "category": "Fashion"
    });
    let err = serde_json::from_value::<Magazine>(value).unwrap_err();
    assert!(
        err.to_string().contains("magazine name"),
        "unexpected error: {err}"
    );

    let value = serde_json::json!({
        "id": "33333333-4444-4555-8666-777777777777",
        "author": "22222222-3333-4444-8555-666666666666",
        "magazine": "11111111-2222-4333-8444-555555555555",
        "title": "Tiny"
    });
    let err = serde_json::from_value::<Article>(value).unwrap_err();
    assert!(
        err.to_string().contains("article title"),
        "unexpected error: {err}"
    );
}
