use dotenvy::dotenv;
use pharmacy_storefront::application::outcome::Outcome;
use pharmacy_storefront::domain::dashboard::{format_count, format_growth};
use pharmacy_storefront::domain::money::format_price;
use pharmacy_storefront::domain::user::Credentials;
use pharmacy_storefront::{AppError, Config, Storefront};
use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage: pharmacy_storefront <catalog [page] | login <email> <password> | logout | orders | dashboard>";

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut storefront = match Storefront::open(&config) {
        Ok(storefront) => storefront,
        Err(e) => {
            log::error!("Failed to start: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Using backend at {}", config.api_base_url);

    let args: Vec<String> = env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("catalog") | None => {
            let page = args.get(1).and_then(|p| p.parse::<u32>().ok()).unwrap_or(1);
            show_catalog(&storefront, page.saturating_sub(1)).await
        }
        Some("login") if args.len() == 3 => {
            let credentials = Credentials {
                email: args[1].clone(),
                password: args[2].clone(),
            };
            let accounts = storefront.accounts();
            accounts
                .login(storefront.session_mut(), &credentials)
                .await
                .map(|session| println!("Signed in as {}", session.user.full_name()))
        }
        Some("logout") => {
            let accounts = storefront.accounts();
            accounts.logout(storefront.session_mut());
            println!("Signed out");
            Ok(())
        }
        Some("orders") => show_orders(&storefront).await,
        Some("dashboard") => show_dashboard(&storefront).await,
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if storefront.observe(&e) {
                eprintln!("{} Run `login` again.", e.notice());
            } else {
                eprintln!("{}", e.notice());
            }
            ExitCode::FAILURE
        }
    }
}

async fn show_catalog(storefront: &Storefront, page: u32) -> Result<(), AppError> {
    let mut catalog = storefront.catalog();
    catalog.load().await?;
    if page > 0 && !catalog.go_to_page(page).await? {
        eprintln!("Page {} does not exist", page + 1);
    }

    if catalog.is_empty_result() {
        println!("No products found");
        return Ok(());
    }
    for item in catalog.records() {
        println!(
            "#{:<5} {:<40} {:>10}  stock {}",
            item.item_id,
            item.item_name,
            format_price(&item.item_price),
            item.stock_quantity
        );
    }
    let state = catalog.state();
    println!(
        "Page {} of {} ({} products)",
        state.current_page + 1,
        state.total_pages,
        state.total_items
    );
    Ok(())
}

async fn show_orders(storefront: &Storefront) -> Result<(), AppError> {
    let mut orders = storefront.my_orders()?;
    orders.load().await?;
    if orders.is_empty_result() {
        println!("No orders yet");
    }
    for order in orders.records() {
        println!(
            "#{:<6} {:<12} {:>10}  {}",
            order.order_id,
            order.order_date.as_deref().unwrap_or("-"),
            format_price(&order.total_amount),
            order.status
        );
    }
    Ok(())
}

async fn show_dashboard(storefront: &Storefront) -> Result<(), AppError> {
    let dashboard = storefront.dashboard()?;
    let snapshot = dashboard.load().await;
    if let Some(e) = snapshot.auth_failure() {
        return Err(e.clone());
    }

    match &snapshot.stats {
        Outcome::Success(stats) => {
            println!(
                "Orders {} ({})  Revenue {} ({})  Products {}  Low stock {}",
                format_count(stats.total_orders),
                format_growth(stats.order_growth_percentage),
                format_price(&stats.total_revenue),
                format_growth(stats.revenue_growth_percentage),
                format_count(stats.total_products),
                format_count(stats.low_stock_count)
            );
        }
        other => println!("Stats unavailable: {}", other.notice().unwrap_or_default()),
    }

    match &snapshot.low_stock {
        Outcome::Success(items) if items.is_empty() => println!("All items are well stocked!"),
        Outcome::Success(items) => {
            for item in items {
                println!(
                    "Low stock: {} (current {}, min {})",
                    item.item_name, item.current_stock, item.min_stock_threshold
                );
            }
        }
        other => println!("Low stock unavailable: {}", other.notice().unwrap_or_default()),
    }

    if let Outcome::Success(orders) = &snapshot.recent_orders {
        println!("{} recent order(s)", orders.len());
    }
    Ok(())
}
