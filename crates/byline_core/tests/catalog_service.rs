use byline_core::{AuthorId, Catalog, CatalogError, CatalogService, ValidationError};
use uuid::Uuid;

#[test]
fn service_registers_publishes_and_answers_queries() {
    let mut service = CatalogService::new(Catalog::new());
    let jane = service.register_author("Jane").unwrap();
    let vogue = service.register_magazine("Vogue", "Fashion").unwrap();

    service.publish_article(jane, vogue, "Fall Lines").unwrap();
    service.publish_article(jane, vogue, "Hem Report").unwrap();
    service.publish_article(jane, vogue, "Silk Notes").unwrap();

    let heavy: Vec<AuthorId> = service
        .catalog()
        .contributing_authors(vogue)
        .unwrap()
        .iter()
        .map(|author| author.id())
        .collect();
    assert_eq!(heavy, [jane]);
    assert_eq!(service.top_publisher().unwrap().id(), vogue);
}

#[test]
fn service_propagates_catalog_errors_unchanged() {
    let mut service = CatalogService::new(Catalog::new());
    let vogue = service.register_magazine("Vogue", "Fashion").unwrap();

    let ghost = AuthorId::from_uuid(Uuid::new_v4());
    let err = service
        .publish_article(ghost, vogue, "Fall Lines Return")
        .unwrap_err();
    assert_eq!(err, CatalogError::AuthorNotFound(ghost));

    let err = service.register_magazine("X", "Fashion").unwrap_err();
    assert_eq!(
        err,
        CatalogError::Validation(ValidationError::MagazineNameLength { chars: 1 })
    );
}

#[test]
fn service_mutations_are_visible_through_the_catalog() {
    let mut service = CatalogService::new(Catalog::new());
    let jane = service.register_author("Jane").unwrap();
    let bob = service.register_author("Bob").unwrap();
    let vogue = service.register_magazine("Vogue", "Fashion").unwrap();
    let article = service
        .publish_article(jane, vogue, "Fall Lines Return")
        .unwrap();

    service.reassign_author(article, bob).unwrap();
    service.rename_magazine(vogue, "Vogue Paris").unwrap();
    service.recategorize_magazine(vogue, "Culture").unwrap();

    let catalog = service.into_catalog();
    assert_eq!(catalog.article(article).unwrap().author(), bob);
    assert_eq!(catalog.magazine(vogue).unwrap().name(), "Vogue Paris");
    assert_eq!(catalog.topic_areas(bob), Some(vec!["Culture"]));
}
