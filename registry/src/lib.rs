use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    repository::{
        catalog::CatalogRepositoryImpl, checkout::CheckoutRepositoryImpl,
        health::HealthCheckRepositoryImpl, material::MaterialRepositoryImpl,
        patron::PatronRepositoryImpl,
    },
};
use kernel::{
    repository::{
        catalog::CatalogRepository, checkout::CheckoutRepository,
        health::HealthCheckRepository, material::MaterialRepository, patron::PatronRepository,
    },
    service::checkout::CheckoutService,
};

// DI コンテナの役割を果たす。ハンドラはここからリポジトリやサービスを取り出す
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    catalog_repository: Arc<dyn CatalogRepository>,
    material_repository: Arc<dyn MaterialRepository>,
    patron_repository: Arc<dyn PatronRepository>,
    checkout_repository: Arc<dyn CheckoutRepository>,
    checkout_service: Arc<CheckoutService>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let catalog_repository = Arc::new(CatalogRepositoryImpl::new(pool.clone()));
        let material_repository: Arc<dyn MaterialRepository> =
            Arc::new(MaterialRepositoryImpl::new(pool.clone()));
        let patron_repository: Arc<dyn PatronRepository> =
            Arc::new(PatronRepositoryImpl::new(pool.clone()));
        let checkout_repository: Arc<dyn CheckoutRepository> =
            Arc::new(CheckoutRepositoryImpl::new(pool));
        let checkout_service = Arc::new(CheckoutService::new(
            material_repository.clone(),
            patron_repository.clone(),
            checkout_repository.clone(),
        ));
        Self {
            health_check_repository,
            catalog_repository,
            material_repository,
            patron_repository,
            checkout_repository,
            checkout_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn catalog_repository(&self) -> Arc<dyn CatalogRepository> {
        self.catalog_repository.clone()
    }

    pub fn material_repository(&self) -> Arc<dyn MaterialRepository> {
        self.material_repository.clone()
    }

    pub fn patron_repository(&self) -> Arc<dyn PatronRepository> {
        self.patron_repository.clone()
    }

    pub fn checkout_repository(&self) -> Arc<dyn CheckoutRepository> {
        self.checkout_repository.clone()
    }

    pub fn checkout_service(&self) -> Arc<CheckoutService> {
        self.checkout_service.clone()
    }
}
