// src/banner.rs

/// Prints the startup banner to stderr, keeping stdout for the rendered result.
pub fn print_banner() {
    let banner = r#"
                 _       _                     _   
 _ __ ___   __ _| |_ ___| |__   ___ __ _ ___| |_ 
| '_ ` _ \ / _` | __/ __| '_ \ / __/ _` / __| __|
| | | | | | (_| | || (__| | | | (_| (_| \__ \ |_ 
|_| |_| |_|\__,_|\__\___|_| |_|\___\__,_|___/\__|

    Cricket Match Prediction Client
"#;
    eprintln!("{}", banner);
}
