use colored::*;
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "🚑 Call Log Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let client = reqwest::Client::new();

    // Paso 1: Pedir servidor y credenciales
    let base_url = prompt_with_default("Servidor", "http://localhost:3000")?;
    let credentials = get_credentials()?;

    // Paso 2: Autenticarse y obtener token
    let token = authenticate(&client, &base_url, &credentials).await?;

    // Paso 3: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 📞 Registrar llamada de prueba");
        println!("2. 📊 Ver estadísticas");
        println!("3. 🔍 Extraer texto OCR");
        println!("4. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-4): ".bright_yellow());
        io::stdout().flush()?;

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;

        match choice.trim() {
            "1" => test_create_call(&client, &base_url, &token).await?,
            "2" => test_stats(&client, &base_url, &token).await?,
            "3" => test_ocr(&client, &base_url, &token).await?,
            "4" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

struct Credentials {
    username: String,
    password: String,
}

fn prompt(label: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{}", format!("{}: ", label).bright_yellow());
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn prompt_with_default(label: &str, default: &str) -> Result<String, Box<dyn std::error::Error>> {
    let value = prompt(&format!("{} [{}]", label, default))?;
    Ok(if value.is_empty() { default.to_string() } else { value })
}

fn get_credentials() -> Result<Credentials, Box<dyn std::error::Error>> {
    println!("{}", "🔐 CREDENCIALES".bright_cyan().bold());
    println!("{}", "================".bright_cyan());

    Ok(Credentials {
        username: prompt("Username")?,
        password: prompt("Password")?,
    })
}

async fn authenticate(
    client: &reqwest::Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<String, Box<dyn std::error::Error>> {
    println!();
    println!("{}", "🔐 AUTENTICANDO...".bright_cyan().bold());

    let response = client
        .post(format!("{}/api/auth/login", base_url))
        .json(&json!({
            "username": credentials.username,
            "password": credentials.password,
        }))
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;

    if !status.is_success() {
        println!("{} {}", "❌ Login fallido:".bright_red(), status);
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Err("login failed".into());
    }

    let user = &body["user"];
    println!(
        "{} {} ({}, {})",
        "✅ Conectado como".bright_green(),
        user["full_name"].as_str().unwrap_or("?"),
        user["role"].as_str().unwrap_or("?"),
        user["vehicle_type"].as_str().unwrap_or("?")
    );

    body["token"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| "token missing in login response".into())
}

async fn test_create_call(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let call_type = prompt_with_default("Tipo de llamada", "urgent")?;
    let start_time = prompt_with_default("Hora inicio", "08:00")?;
    let end_time = prompt_with_default("Hora fin", "08:45")?;
    let vehicle_number = prompt("Número de vehículo (vacío = código MDA)")?;

    let mut payload = json!({
        "call_type": call_type,
        "call_date": chrono_today(),
        "start_time": start_time,
        "end_time": end_time,
    });
    if !vehicle_number.is_empty() {
        payload["vehicle_number"] = json!(vehicle_number);
    }

    println!("{}", "📦 Payload:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    let response = client
        .post(format!("{}/api/calls", base_url))
        .bearer_auth(token)
        .json(&payload)
        .send()
        .await?;

    print_response(response).await
}

async fn test_stats(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let window = prompt_with_default("Ventana (today/week/month)", "today")?;

    let response = client
        .get(format!("{}/api/stats", base_url))
        .query(&[("window", window.as_str())])
        .bearer_auth(token)
        .send()
        .await?;

    print_response(response).await
}

async fn test_ocr(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = prompt("Texto OCR")?;

    let response = client
        .post(format!("{}/api/ocr/extract", base_url))
        .bearer_auth(token)
        .json(&json!({ "text": text }))
        .send()
        .await?;

    print_response(response).await
}

async fn print_response(response: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    if status.is_success() {
        println!("{} {}", "✅ Respuesta:".bright_green(), status);
    } else {
        println!("{} {}", "❌ Error:".bright_red(), status);
    }
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

fn chrono_today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
