use clap::Parser;
use costarpath::app::CostarPathApp;
use costarpath::colors::ColorScheme;
use costarpath::display::{display_search_info, display_search_results};
use costarpath::json_output::{create_json_output, print_json_output};
use costarpath::*;
use tracing_subscriber::EnvFilter;

fn main() {
    let search_args = Args::parse();
    init_tracing(search_args.verbose);

    let colors = ColorScheme::new(!search_args.no_color && !search_args.json);

    let app = match CostarPathApp::new(search_args.data.clone()) {
        Ok(app) => app,
        Err(e) => exit_with_error(&colors, &e.to_string()),
    };

    let show_progress = !search_args.quiet && !search_args.json;
    let store = match app.load_data(show_progress) {
        Ok(store) => store,
        Err(e) => exit_with_error(&colors, &e.to_string()),
    };
    tracing::debug!(
        people = store.person_count(),
        films = store.film_count(),
        "data loaded"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let search_request =
        match create_search_request(search_args, &store, &mut stdin.lock(), &mut stdout.lock()) {
            Ok(request) => request,
            Err(error_message) => exit_with_error(&colors, &error_message),
        };

    let json_mode = search_request.search_args.json;
    if search_request.search_args.verbose && !json_mode {
        display_search_info(&search_request, &colors);
    }

    let search_result = execute_search(search_request, &store);

    if json_mode {
        let json_output = create_json_output(&search_result, &store);
        print_json_output(&json_output);
    } else {
        display_search_results(search_result, &store, &colors);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with_error(colors: &ColorScheme, message: &str) -> ! {
    eprintln!("{}", colors.error(&format!("❌ Error: {}", message)));
    std::process::exit(1);
}
