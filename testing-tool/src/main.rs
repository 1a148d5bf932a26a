use colored::*;
use serde::Deserialize;
use serde_json::Value;
use std::io::{self, Write};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Deserialize)]
struct Scooter {
    id: String,
    name: String,
    battery_level: u8,
    status: String,
    #[serde(default)]
    price_per_minute: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "🛴 Scooter Fleet Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url = prompt(&format!("URL del servidor [{}]: ", DEFAULT_BASE_URL))?;
    let base_url = if base_url.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        base_url.trim_end_matches('/').to_string()
    };
    let client = reqwest::Client::new();

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 💚 Health check");
        println!("2. 📋 Listar scooters");
        println!("3. 🔍 Ver scooter");
        println!("4. 🔓 Desbloquear scooter");
        println!("5. 🔒 Bloquear scooter");
        println!("6. 🚪 Salir");

        let choice = prompt("Selecciona una opción (1-6): ")?;
        let result = match choice.as_str() {
            "1" => health(&client, &base_url).await,
            "2" => list_scooters(&client, &base_url).await,
            "3" => {
                let id = prompt("ID del scooter: ")?;
                show_scooter(&client, &format!("{}/api/scooters/{}", base_url, id), reqwest::Method::GET).await
            }
            "4" => {
                let id = prompt("ID del scooter: ")?;
                show_scooter(&client, &format!("{}/api/scooters/{}/unlock", base_url, id), reqwest::Method::POST).await
            }
            "5" => {
                let id = prompt("ID del scooter: ")?;
                show_scooter(&client, &format!("{}/api/scooters/{}/lock", base_url, id), reqwest::Method::POST).await
            }
            "6" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{} {}", "❌ Error de conexión:".bright_red(), e);
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

async fn health(client: &reqwest::Client, base_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let response = client.get(format!("{}/health", base_url)).send().await?;
    let status = response.status();
    let body: Value = response.json().await?;
    println!("{} {}", "📥 Status:".bright_blue(), status);
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

async fn list_scooters(client: &reqwest::Client, base_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let response = client.get(format!("{}/api/scooters", base_url)).send().await?;
    let mut scooters: Vec<Scooter> = response.json().await?;
    scooters.sort_by(|a, b| a.id.cmp(&b.id));

    println!();
    println!("{}", format!("🛴 {} scooters", scooters.len()).bright_cyan().bold());
    for scooter in &scooters {
        print_scooter(scooter);
    }
    Ok(())
}

async fn show_scooter(
    client: &reqwest::Client,
    url: &str,
    method: reqwest::Method,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = client.request(method.clone(), url).send().await?;
    let status = response.status();
    println!("{} {} {}", "📤".bright_blue(), method, url);

    if status.is_success() {
        let scooter: Scooter = response.json().await?;
        println!("{} {}", "✅".bright_green(), status);
        print_scooter(&scooter);
    } else {
        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body["error"].as_str().unwrap_or("sin mensaje");
        println!("{} {} - {}", "❌".bright_red(), status, message.bright_red());
    }
    Ok(())
}

fn print_scooter(scooter: &Scooter) {
    let status = match scooter.status.as_str() {
        "available" => scooter.status.bright_green(),
        "in_use" => scooter.status.bright_yellow(),
        _ => scooter.status.bright_red(),
    };
    let price = scooter
        .price_per_minute
        .map(|p| format!("{:.2}/min", p))
        .unwrap_or_else(|| "-".to_string());

    println!(
        "  {} {:<28} 🔋 {:>3}%  {:<12} {}",
        scooter.id.bold(),
        scooter.name,
        scooter.battery_level,
        status,
        price
    );
}
