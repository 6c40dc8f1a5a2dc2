use anyhow::{Context, Result};
use cerkas_cli::output::{self, OutputFormat};
use cerkas_cli::settings::Settings;
use cerkas_client::{ClientSettings, HttpBackend, Sequencer};
use cerkas_model::RouteIdentity;
use cerkas_render::{ColumnPolicy, PanelSelection};
use tracing::{debug, info};

use crate::cli::ViewArgs;

/// Run one fetch cycle and print the rendered view.
///
/// Returns the process exit code: `0` when both stages succeeded.
pub fn run_view(args: &ViewArgs, settings: Settings) -> Result<i32> {
    let route = RouteIdentity::parse(&args.route.join("/")).context("parse route")?;
    let client = apply_view_overrides(settings.client.with_env_overrides(), args);
    let policy = if args.show_metadata {
        ColumnPolicy::new(Vec::<String>::new())
    } else {
        settings.columns
    };
    let panels = PanelSelection {
        params: args.show_params,
        layout_response: args.show_layout_response,
        data_response: args.show_data_response,
    };
    debug!(base_url = %client.base_url, page = client.page, page_size = client.page_size, "client settings");

    let backend = HttpBackend::new(&client).context("build HTTP client")?;
    let sequencer = Sequencer::new(backend, client);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    let outcome = runtime.block_on(sequencer.run_cycle(route));
    let state = outcome.state;
    info!(
        layout = state.layout.label(),
        data = state.data.label(),
        "cycle finished"
    );

    let rendered = output::render(&state, &policy, panels, OutputFormat::from(args.format))
        .context("render view")?;
    println!("{rendered}");

    if state.is_complete() {
        return Ok(0);
    }
    for line in output::stage_errors(&state) {
        eprintln!("error: {line}");
    }
    Ok(1)
}

/// Print the effective settings, env and defaults applied.
pub fn run_config(settings: Settings) -> Result<()> {
    let effective = Settings {
        client: settings.client.with_env_overrides(),
        ..settings
    };
    print!("{}", effective.to_toml()?);
    Ok(())
}

fn apply_view_overrides(mut client: ClientSettings, args: &ViewArgs) -> ClientSettings {
    if let Some(base_url) = &args.base_url {
        client.base_url.clone_from(base_url);
    }
    if let Some(page) = args.page {
        client.page = page;
    }
    if let Some(page_size) = args.page_size {
        client.page_size = page_size;
    }
    if args.timeout.is_some() {
        client.request_timeout_secs = args.timeout;
    }
    client
}
