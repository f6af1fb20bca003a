use crate::infra::{demo_companies, scoring_service_from_env, DemoCompany};
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use velocity_lend::error::AppError;
use velocity_lend::insight::InsightClient;
use velocity_lend::workflows::scoring::views::{format_turns, format_usd};
use velocity_lend::workflows::scoring::{
    BusinessProfile, Industry, ProfileInput, RawNumber, ScoreReportView, ScoringService,
};
use velocity_lend::workflows::upload::CustomerUploadImporter;

const TRADITIONAL_RATE: f64 = 20.0;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Loan amount used for the savings illustrations.
    #[arg(long, default_value_t = 1_000_000.0)]
    pub(crate) loan_amount: f64,
    /// Optional customer inventory export to close the walkthrough with.
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Skip the SKU intelligence portion of the demo.
    #[arg(long)]
    pub(crate) skip_sku_match: bool,
    /// Skip the business scoring comparison.
    #[arg(long)]
    pub(crate) skip_scoring: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Annual revenue in dollars.
    #[arg(long)]
    pub(crate) revenue: Option<f64>,
    /// Annual inventory turnover ratio.
    #[arg(long)]
    pub(crate) turns: Option<f64>,
    /// Industry label (e.g. "Food & Beverage").
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Years the business has operated.
    #[arg(long)]
    pub(crate) years: Option<f64>,
    /// Optional loan amount for the savings illustration.
    #[arg(long)]
    pub(crate) loan_amount: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct UploadArgs {
    /// Customer inventory export (CSV).
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Declared annual revenue in dollars.
    #[arg(long)]
    pub(crate) revenue: Option<f64>,
    /// Industry label.
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Years the business has operated.
    #[arg(long)]
    pub(crate) years: Option<f64>,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = scoring_service_from_env()?;
    let today = Local::now().date_naive();

    println!("SKU-velocity lending demo ({today})");
    println!("{}", service.insight_status().message());

    render_value_proposition(args.loan_amount);

    let companies = demo_companies();

    if !args.skip_sku_match {
        render_sku_intelligence(&service, &companies[0]).await;
    }

    if !args.skip_scoring {
        render_scoring_comparison(&service, &companies).await;
        render_rate_calculator(&service, args.loan_amount);
    }

    if let Some(csv) = args.csv {
        println!("\nCustomer data upload");
        run_upload(UploadArgs {
            csv,
            revenue: None,
            industry: None,
            years: None,
        })
        .await?;
    }

    Ok(())
}

fn render_value_proposition(loan_amount: f64) {
    println!("\nThe velocity advantage");
    println!("- Traditional lending: 18-22% for every business, 2-8 weeks to decide");
    println!("- Velocity-based: 10-22% tied to inventory performance, <24 hour decisions");

    let rate_savings_points = 8.0;
    let annual_savings = loan_amount * rate_savings_points / 100.0;
    println!(
        "- Example: a {} loan at {rate_savings_points} points lower saves {} per year",
        format_usd(loan_amount),
        format_usd(annual_savings)
    );
}

async fn render_sku_intelligence(service: &ScoringService<InsightClient>, company: &DemoCompany) {
    println!("\nSKU intelligence: {}", company.name);

    let identifiers = &company.skus[0];
    println!("Fragmented identifiers seen as four different products:");
    println!("- ERP system:      {}", identifiers.erp_code);
    println!("- WMS system:      {}", identifiers.warehouse_code);
    println!("- Storefront:      {}", identifiers.storefront_slug);
    println!("- Product name:    {}", identifiers.product_name);

    let matched = service.match_identifiers(identifiers).await;
    println!(
        "Unified as '{}' with {}% confidence ({})",
        matched.unified_name,
        matched.confidence,
        matched.source.label()
    );
    println!("Reasoning: {}", matched.reasoning);
    for risk in &matched.risk_factors {
        println!("Risk factor: {risk}");
    }
    println!("Time saved: 2+ hours -> 30 seconds | Accuracy: 95%+ with AI vs 60% manual");
}

async fn render_scoring_comparison(
    service: &ScoringService<InsightClient>,
    companies: &[DemoCompany],
) {
    println!("\nBusiness scoring comparison");

    let mut detailed: Option<(String, ScoreReportView)> = None;
    for company in companies {
        let profile = company_profile(company);
        let result = service.analyze(&profile).await;
        let view = ScoreReportView::from_result(&result, service.insight_status());

        println!(
            "- {} | {} revenue | {} turns | score {}/100 | rate {}% | {}",
            company.name,
            format_usd(company.revenue),
            format_turns(company.inventory_turns),
            view.final_score,
            view.recommended_rate,
            view.decision_label
        );

        if detailed.is_none() {
            detailed = Some((company.name.to_string(), view));
        }
    }

    if let Some((name, view)) = detailed {
        println!("\nDetailed factors for {name}");
        for factor in &view.factors {
            println!("  - {factor}");
        }
        println!(
            "  Category: {} | Insight source: {}",
            view.risk_category_label,
            view.insight_source.label()
        );
    }
}

fn render_rate_calculator(service: &ScoringService<InsightClient>, loan_amount: f64) {
    println!("\nRate calculator sample");
    let profile = BusinessProfile {
        revenue: 2_000_000.0,
        inventory_turns: 6.0,
        industry: Industry::FoodAndBeverage,
        years_operating: 3.0,
    };
    let quick = service.quick_score(&profile);

    println!(
        "- Input: {} revenue, {} turns, {} industry, 3 years operating",
        format_usd(profile.revenue),
        format_turns(profile.inventory_turns),
        profile.industry.label()
    );
    println!(
        "- Score {}/100 -> rate {}% ({})",
        quick.score,
        quick.recommended_rate,
        quick.decision.label()
    );

    let savings = (TRADITIONAL_RATE - quick.recommended_rate as f64) / 100.0 * loan_amount;
    if savings > 0.0 {
        println!(
            "- Annual savings vs a {TRADITIONAL_RATE}% traditional rate on {}: {}",
            format_usd(loan_amount),
            format_usd(savings)
        );
    }
}

pub(crate) async fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let service = scoring_service_from_env()?;

    let input = ProfileInput {
        revenue: args.revenue.map(RawNumber::Number),
        inventory_turns: args.turns.map(RawNumber::Number),
        industry: args.industry,
        years_operating: args.years.map(RawNumber::Number),
    };
    let profile = input
        .resolve()
        .map_err(|err| AppError::validation(err.to_string()))?;

    let result = service.analyze(&profile).await;
    let view = ScoreReportView::from_result(&result, service.insight_status());

    println!("Score: {}/100 ({})", view.final_score, view.risk_category_label);
    println!("Rate: {}% | Decision: {}", view.recommended_rate, view.decision_label);
    println!("Factors:");
    for factor in &view.factors {
        println!("  - {factor}");
    }
    println!("Insight source: {}", view.insight_source.label());

    if let Some(loan_amount) = args.loan_amount {
        let savings = (TRADITIONAL_RATE - view.recommended_rate as f64) / 100.0 * loan_amount;
        if savings > 0.0 {
            println!(
                "Annual savings vs a {TRADITIONAL_RATE}% traditional rate on {}: {}",
                format_usd(loan_amount),
                format_usd(savings)
            );
        }
    }

    Ok(())
}

pub(crate) async fn run_upload(args: UploadArgs) -> Result<(), AppError> {
    let service = scoring_service_from_env()?;

    let snapshot = CustomerUploadImporter::from_path(&args.csv)?;
    let derived_turns = snapshot.derived_turns(args.revenue);

    println!(
        "Imported {} SKU line(s), {} of inventory at cost",
        snapshot.rows().len(),
        format_usd(snapshot.inventory_value())
    );
    println!("Derived inventory turns: {}", format_turns(derived_turns));

    if let Some(identifiers) = snapshot.lead_identifiers() {
        let matched = service.match_identifiers(&identifiers).await;
        println!(
            "Lead SKU unified as '{}' with {}% confidence ({})",
            matched.unified_name,
            matched.confidence,
            matched.source.label()
        );
    }

    let input = ProfileInput {
        revenue: args.revenue.map(RawNumber::Number),
        inventory_turns: Some(RawNumber::Number(derived_turns)),
        industry: args.industry,
        years_operating: args.years.map(RawNumber::Number),
    };
    let profile = input
        .resolve()
        .map_err(|err| AppError::validation(err.to_string()))?;
    let quick = service.quick_score(&profile);

    println!(
        "Instant score: {}/100 -> rate {}% ({})",
        quick.score,
        quick.recommended_rate,
        quick.decision.label()
    );
    println!("Next steps: {}", quick.next_steps);

    Ok(())
}

fn company_profile(company: &DemoCompany) -> BusinessProfile {
    BusinessProfile {
        revenue: company.revenue,
        inventory_turns: company.inventory_turns,
        industry: Industry::from_label(company.industry),
        years_operating: company.years_operating,
    }
}
