use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use velocity_lend::config::AppConfig;
use velocity_lend::error::AppError;
use velocity_lend::insight::InsightClient;
use velocity_lend::workflows::scoring::{ScoringConfig, ScoringService};
use velocity_lend::workflows::sku::SkuIdentifiers;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig {
        base_score: 50,
        excellent_turns: 8.0,
        good_turns: 4.0,
        moderate_turns: 2.0,
        large_revenue: 5_000_000.0,
        solid_revenue: 1_000_000.0,
        small_revenue: 500_000.0,
        veteran_years: 5.0,
        established_years: 2.0,
        insight_cap: 10,
    }
}

/// Build the scoring service from environment configuration. Used by the CLI
/// paths; the server builds its own from the already-loaded `AppConfig`.
pub(crate) fn scoring_service_from_env() -> Result<ScoringService<InsightClient>, AppError> {
    let config = AppConfig::load()?;
    Ok(scoring_service(&config))
}

pub(crate) fn scoring_service(config: &AppConfig) -> ScoringService<InsightClient> {
    let insight = InsightClient::from_config(&config.insight);
    ScoringService::new(Arc::new(insight), default_scoring_config())
}

/// Fixture company used across the demo walkthrough.
#[derive(Debug, Clone)]
pub(crate) struct DemoCompany {
    pub(crate) name: &'static str,
    pub(crate) industry: &'static str,
    pub(crate) revenue: f64,
    pub(crate) inventory_turns: f64,
    pub(crate) years_operating: f64,
    pub(crate) description: &'static str,
    pub(crate) skus: Vec<SkuIdentifiers>,
}

pub(crate) fn demo_companies() -> Vec<DemoCompany> {
    vec![
        DemoCompany {
            name: "VelocitySnacks Co",
            industry: "Food & Beverage",
            revenue: 3_500_000.0,
            inventory_turns: 12.0,
            years_operating: 4.0,
            description: "Fast-growing protein bar company with strong D2C sales",
            skus: vec![
                SkuIdentifiers {
                    erp_code: "PB-CHOC-001".to_string(),
                    warehouse_code: "PROTBAR_CHOC_12PK".to_string(),
                    storefront_slug: "protein-bar-chocolate".to_string(),
                    product_name: "Chocolate Protein Bar".to_string(),
                },
                SkuIdentifiers {
                    erp_code: "PB-VAN-001".to_string(),
                    warehouse_code: "PROTBAR_VAN_12PK".to_string(),
                    storefront_slug: "protein-bar-vanilla".to_string(),
                    product_name: "Vanilla Protein Bar".to_string(),
                },
            ],
        },
        DemoCompany {
            name: "HealthyFoods Inc",
            industry: "Supplements",
            revenue: 1_200_000.0,
            inventory_turns: 6.0,
            years_operating: 2.0,
            description: "Growing supplement brand with seasonal patterns",
            skus: vec![SkuIdentifiers {
                erp_code: "VD3-5000-60".to_string(),
                warehouse_code: "VITAMIN_D3_60CT".to_string(),
                storefront_slug: "vitamin-d3-5000iu".to_string(),
                product_name: "Vitamin D3 Supplement".to_string(),
            }],
        },
        DemoCompany {
            name: "GourmetSauces Ltd",
            industry: "Specialty Foods",
            revenue: 800_000.0,
            inventory_turns: 2.5,
            years_operating: 6.0,
            description: "Premium sauce maker with inventory challenges",
            skus: vec![SkuIdentifiers {
                erp_code: "GPS-TRUF-16".to_string(),
                warehouse_code: "SAUCE_TRUFFLE_16OZ".to_string(),
                storefront_slug: "gourmet-truffle-sauce".to_string(),
                product_name: "Truffle Pasta Sauce".to_string(),
            }],
        },
    ]
}
