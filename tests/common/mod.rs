// tests/common/mod.rs
use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::{json, Value};

/// Stand-in for the prediction service; behaviour is keyed on `team1`.
async fn stub_predict(body: web::Json<Value>) -> HttpResponse {
    let body = body.into_inner();
    let team1 = body["team1"].as_str().unwrap_or_default().to_string();
    let team2 = body["team2"].as_str().unwrap_or_default().to_string();

    match team1.as_str() {
        "Nowhere" => HttpResponse::Ok().json(json!({"error": "Invalid venue"})),
        "Crash" => HttpResponse::InternalServerError().body("model.pkl not loaded"),
        "Garbled" => HttpResponse::Ok().content_type("text/html").body("<html>oops</html>"),
        "Echo" => {
            let fields = body.as_object().cloned().unwrap_or_default();
            let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
            HttpResponse::Ok().json(json!({
                "winner": team1,
                "team1": team1,
                "team2": team2,
                "team1_confidence": 50,
                "team2_confidence": 50,
                "reason": format!("{} | {}", keys.join(","), body["venue"].as_str().unwrap_or_default())
            }))
        }
        "Boundary" => HttpResponse::Ok().json(json!({
            "winner": team1,
            "team1": team1,
            "team2": team2,
            "team1_confidence": 100,
            "team2_confidence": 0,
            "reason": "Team 1 is historically present in dataset"
        })),
        "Slow" => {
            actix_web::rt::time::sleep(Duration::from_millis(300)).await;
            HttpResponse::Ok().json(json!({
                "winner": team2,
                "team1": team1,
                "team2": team2,
                "team1_confidence": 40,
                "team2_confidence": 60,
                "reason": "Rule-based prediction using toss & venue"
            }))
        }
        _ => HttpResponse::Ok().json(json!({
            "winner": "India",
            "team1": "India",
            "team2": "Australia",
            "team1_confidence": 63,
            "team2_confidence": 37,
            "reason": "Home advantage"
        })),
    }
}

pub fn spawn_stub() -> String {
    let server = HttpServer::new(|| App::new().route("/predict", web::post().to(stub_predict)))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}
