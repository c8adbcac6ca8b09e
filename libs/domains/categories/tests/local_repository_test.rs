//! Integration tests for the local category repository

use domain_categories::local::CATEGORIES_KEY;
use domain_categories::{
    Category, CategoryError, CategoryService, CreateCategory, LocalCategoryRepository,
    UpdateCategory, DEFAULT_COLOR,
};
use storage::local::{JsonStore, LocalStoreConfig};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> JsonStore {
    JsonStore::new(LocalStoreConfig::new(dir.path()))
}

fn empty_service(dir: &TempDir) -> CategoryService<LocalCategoryRepository> {
    let store = store_in(dir);
    store.save(CATEGORIES_KEY, &Vec::<Category>::new()).unwrap();
    CategoryService::new(LocalCategoryRepository::new(store))
}

#[tokio::test]
async fn test_first_run_seeds_from_bundled_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let service = CategoryService::new(LocalCategoryRepository::new(store_in(&dir)));

    let categories = service.list_categories().await;
    assert!(!categories.is_empty());
    assert!(categories.iter().any(|c| c.name == "general"));
}

#[tokio::test]
async fn test_create_applies_default_color() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    let created = service
        .create_category(CreateCategory {
            name: "errands".to_string(),
            color: None,
        })
        .await
        .unwrap();

    let fetched = service.get_category(&created.id).await.unwrap();
    assert_eq!(fetched.color, DEFAULT_COLOR);
    assert_eq!(fetched.task_count, 0);
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    for name in ["work", "home", "personal"] {
        service
            .create_category(CreateCategory {
                name: name.to_string(),
                color: None,
            })
            .await
            .unwrap();
    }

    let names: Vec<String> = service
        .list_categories()
        .await
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["work", "home", "personal"]);
}

#[tokio::test]
async fn test_update_merges_only_supplied_fields() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    let created = service
        .create_category(CreateCategory {
            name: "home".to_string(),
            color: Some("#10B981".to_string()),
        })
        .await
        .unwrap();

    let updated = service
        .update_category(
            &created.id,
            UpdateCategory {
                color: Some("#EF4444".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "home");
    assert_eq!(updated.color, "#EF4444");
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let service = empty_service(&dir);

    let created = service
        .create_category(CreateCategory {
            name: "fleeting".to_string(),
            color: None,
        })
        .await
        .unwrap();

    service.delete_category(&created.id).await.unwrap();
    assert!(matches!(
        service.get_category(&created.id).await,
        Err(CategoryError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_category(&created.id).await,
        Err(CategoryError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_created_category_survives_a_store_reload() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let service = empty_service(&dir);
        service
            .create_category(CreateCategory {
                name: "persisted".to_string(),
                color: Some("#8B5CF6".to_string()),
            })
            .await
            .unwrap()
    };

    let reloaded = CategoryService::new(LocalCategoryRepository::new(store_in(&dir)));
    let fetched = reloaded.get_category(&created.id).await.unwrap();

    assert_eq!(fetched, created);
}
