//! PostgreSQL repository tests.
//!
//! These need a disposable database and are ignored by default:
//!
//! ```text
//! TRUCKREG_TEST_DATABASE_URL=postgres://... cargo test --test postgres_test -- --ignored
//! ```

use truckreg_core::config::DatabaseConfig;
use truckreg_core::{Entity, ErrorKind, Repository};
use truckreg_database::migration::run_migrations;
use truckreg_database::{DatabasePool, PgRepository};
use truckreg_entity::truck::{Truck, TruckModel};

async fn repository() -> PgRepository<Truck> {
    let url = std::env::var("TRUCKREG_TEST_DATABASE_URL")
        .expect("TRUCKREG_TEST_DATABASE_URL must be set for PostgreSQL tests");
    let config = DatabaseConfig {
        url,
        max_connections: 2,
        ..DatabaseConfig::default()
    };

    let pool = DatabasePool::connect(&config)
        .await
        .expect("Failed to connect to test database");
    run_migrations(pool.pool())
        .await
        .expect("Failed to run migrations");

    sqlx::query("TRUNCATE trucks RESTART IDENTITY")
        .execute(pool.pool())
        .await
        .expect("Failed to clean trucks table");

    PgRepository::new(pool.pool().clone())
}

// Every test truncates the shared table, so they all live in one test.
#[tokio::test]
#[ignore = "requires TRUCKREG_TEST_DATABASE_URL"]
async fn test_pg_repository_lifecycle() {
    let repo = repository().await;

    let first = repo
        .add(Truck::new(TruckModel::Fh, 2021, Some(2021)))
        .await
        .unwrap();
    let second = repo
        .add(Truck::new(TruckModel::Fh, 2020, None).with_id(77))
        .await
        .unwrap();
    let third = repo
        .add(Truck::new(TruckModel::Fm, 2021, Some(2022)))
        .await
        .unwrap();
    assert_eq!((first.id(), second.id(), third.id()), (1, 2, 3));
    assert_eq!(second.model_year, 2020);

    assert!(repo.exists(2).await.unwrap());
    assert!(!repo.exists(4).await.unwrap());
    assert_eq!(repo.get(3).await.unwrap(), Some(third.clone()));
    assert_eq!(repo.get(4).await.unwrap(), None);

    let edited = Truck::new(TruckModel::Fm, 2019, Some(2019)).with_id(2);
    repo.edit(edited.clone()).await.unwrap();
    assert_eq!(repo.get(2).await.unwrap(), Some(edited));

    let missing = Truck::new(TruckModel::Fm, 2019, None).with_id(40);
    assert_eq!(
        repo.edit(missing).await.unwrap_err().kind,
        ErrorKind::NotFound
    );

    repo.delete(2).await.unwrap();
    let ids: Vec<_> = repo
        .get_all()
        .await
        .unwrap()
        .iter()
        .map(Entity::id)
        .collect();
    assert_eq!(ids, vec![1, 3]);

    assert_eq!(repo.delete(2).await.unwrap_err().kind, ErrorKind::NotFound);
}
