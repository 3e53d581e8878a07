// src/render.rs
//! Markup written into the result container.

use crate::models::{Prediction, PredictionOutcome};

pub fn render_outcome(outcome: &PredictionOutcome) -> String {
    match outcome {
        PredictionOutcome::Success(prediction) => render_prediction(prediction),
        PredictionOutcome::ApplicationError(message) => render_error(message),
        PredictionOutcome::TransportError(e) => render_error(&format!("Prediction failed: {}", e)),
    }
}

/// A single red paragraph carrying the message.
pub fn render_error(message: &str) -> String {
    format!(r#"<p style="color:red">{}</p>"#, escape_html(message))
}

/// Winner heading, one line and bar per team, then the reason.
pub fn render_prediction(p: &Prediction) -> String {
    let team1_confidence = format_confidence(p.team1_confidence);
    let team2_confidence = format_confidence(p.team2_confidence);

    format!(
        r#"<h3>🏆 Winner: {winner}</h3>
<p>{team1} – {c1}%</p>
<div class="bar"><div class="fill" style="width:{c1}%"></div></div>
<p>{team2} – {c2}%</p>
<div class="bar"><div class="fill" style="width:{c2}%"></div></div>
<p>📊 {reason}</p>"#,
        winner = escape_html(&p.winner),
        team1 = escape_html(&p.team1),
        team2 = escape_html(&p.team2),
        c1 = team1_confidence,
        c2 = team2_confidence,
        reason = escape_html(&p.reason),
    )
}

/// `63.0` prints as `63`, `63.45` as `63.45`. Not clamped to 0..=100.
/// Very large or very small magnitudes print positionally, never in
/// exponent form.
pub fn format_confidence(value: f64) -> String {
    if value == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
