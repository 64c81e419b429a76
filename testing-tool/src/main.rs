use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use colored::*;

use royal_transfer::catalog::{
    Catalog, HapticFeedback, SectionState, VehicleSection, View,
};
use royal_transfer::clients::TransferApiClient;
use royal_transfer::dto::application_request_dto::CreateApplicationRequest;
use royal_transfer::models::SiteSettings;

/// Terminal bell stands in for vibration
struct BellHaptics;

impl HapticFeedback for BellHaptics {
    fn pulse(&self, _duration: Duration) {
        print!("\x07");
        if let Err(e) = io::stdout().flush() {
            eprintln!("{} {}", "⚠️ Failed to flush stdout:".bright_yellow(), e);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:3000".to_string());

    println!("{}", "🚐 Royal Transfer - catalog preview".bright_blue().bold());
    println!("{}", "===================================".bright_blue());
    let client = TransferApiClient::new(base_url)?;
    println!("API: {}", client.base_url().bright_white());

    match client.fetch_settings().await {
        Ok(settings) => print_header(&settings),
        Err(e) => println!("{} {}", "⚠️ Settings unavailable:".bright_yellow(), e),
    }

    println!();
    println!("{}", "⏳ Loading fleet...".bright_cyan());
    let mut section = VehicleSection::mount(Arc::new(client.clone()), Arc::new(BellHaptics));

    section.resolved().await;
    if let SectionState::Unavailable { message } = section.state() {
        println!("{}", "Наш автопарк".bold());
        println!("{}", message.bright_red());
        return Ok(());
    }
    let Some(catalog) = section.catalog_mut() else {
        return Ok(());
    };

    loop {
        println!();
        match catalog.view() {
            View::Browsing => print_browsing(catalog),
            View::Detail => print_detail(catalog),
        }

        print!("{}", "> ".bright_yellow());
        io::stdout().flush()?;
        let Some(input) = read_line(&mut io::stdin().lock())? else {
            println!();
            break;
        };

        match input.as_str() {
            "q" => {
                println!("{}", "👋 До свидания!".bright_green());
                break;
            }
            "b" => catalog.back(),
            "d" => catalog.show_detail(),
            "o" => {
                let heading = catalog.order().heading();
                book(&client, &heading).await?;
                catalog.booking_mut().close();
            }
            id => {
                if let Err(e) = catalog.select(id) {
                    println!("{} {}", "❌".bright_red(), e);
                }
            }
        }
    }

    Ok(())
}

fn print_header(settings: &SiteSettings) {
    println!();
    println!("{}", settings.company_name.bold());
    println!("🖼️ {}", settings.header_logo());
    println!("📞 {} ({})", settings.phone, settings.phone_href());
    println!("📷 {}", settings.instagram_link);
    println!("✈️ {}", settings.telegram_link);
    println!("💬 {}", settings.whatsapp_link);
    println!("{}", format!("footer logo: {}", settings.footer_logo()).dimmed());
}

fn print_browsing(catalog: &Catalog) {
    println!("{}", "📋 НАШ АВТОПАРК".bright_green().bold());
    for vehicle in catalog.vehicles() {
        let marker = if vehicle.id == catalog.active().id { "•" } else { " " };
        let badge = vehicle.badge().map(|b| format!(" [{}]", b.bright_red())).unwrap_or_default();
        println!(
            "{} [{}] {}{} - {} {} ({})",
            marker,
            vehicle.id.bright_yellow(),
            vehicle.name.bold(),
            badge,
            vehicle.brand,
            vehicle.model,
            vehicle.price.bright_cyan()
        );
    }
    println!("{}", "<id> выбрать · d детали · o заказать · q выход".dimmed());
}

fn print_detail(catalog: &Catalog) {
    let vehicle = catalog.active();
    println!("{}", vehicle.title().bright_green().bold());
    println!("{} год · {} места · {}", vehicle.year, vehicle.seats, vehicle.price.bright_cyan());
    let photo = if vehicle.has_photo() { "фото" } else { "заглушка класса" };
    println!("🖼️ {} ({})", vehicle.display_image(), photo);
    println!("{}", vehicle.description);
    for (feature, icon) in vehicle.features_with_icons() {
        println!("  {:?}: {}", icon, feature);
    }
    println!("{}", "<id> выбрать · b назад · o выбрать класс · q выход".dimmed());
}

async fn book(client: &TransferApiClient, heading: &str) -> Result<()> {
    println!("{}", heading.bright_magenta().bold());
    let (Some(name), Some(phone), Some(contact_method)) = (
        prompt("Имя: ")?,
        prompt("Телефон: ")?,
        prompt("Способ связи (call/telegram/whatsapp): ")?,
    ) else {
        return Ok(());
    };
    let request = CreateApplicationRequest {
        name: Some(name),
        phone: Some(phone),
        contact_method: Some(contact_method),
    };

    match client.submit_application_request(&request).await {
        Ok(created) => println!(
            "{} #{}",
            "✅ Заявка отправлена".bright_green(),
            created.id
        ),
        Err(e) => println!("{} {}", "❌".bright_red(), e.submission_message()),
    }
    Ok(())
}

fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    read_line(&mut io::stdin().lock())
}

/// Trimmed line from `input`, `None` at end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
