use anyhow::Result;
use autosched_dispatcher::{element, FormPage, Page, RequestDispatcher, ScheduleButton};
use clap::Parser;
use dotenvy::dotenv;
use shared::telemetry::{self, TelemetryConfig};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "autosched-dispatch", about = "Schedule a meeting through the scheduling service")]
struct Args {
    #[arg(long, env = "MEETING_TOPIC", default_value = "")]
    topic: String,

    /// Start time, passed through unvalidated (e.g. 2024-05-10T15:00:00Z)
    #[arg(long, env = "MEETING_START_TIME", default_value = "")]
    start_time: String,

    /// Duration in minutes; text that is not a number is sent as null
    #[arg(long, env = "MEETING_DURATION", default_value = "")]
    duration: String,

    #[arg(long, env = "ZOOM_ACCESS_TOKEN", default_value = "")]
    access_token: String,

    #[arg(long, env = "SCHEDULER_API_URL", default_value = autosched_dispatcher::DEFAULT_API_URL)]
    api_url: String,
}

/// Prints every status update as its own line.
struct TerminalPage {
    form: FormPage,
}

impl Page for TerminalPage {
    fn field_value(&self, id: &str) -> Option<String> {
        self.form.field_value(id)
    }

    fn set_text(&self, id: &str, text: &str) {
        if id == element::RESPONSE {
            println!("{}", text);
        }
        self.form.set_text(id, text);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let telemetry_config = TelemetryConfig::from_env("autosched-dispatch");
    telemetry::init_telemetry(telemetry_config)?;

    let args = Args::parse();

    let form = FormPage::new();
    form.set_field(element::TOPIC, &args.topic);
    form.set_field(element::START_TIME, &args.start_time);
    form.set_field(element::DURATION, &args.duration);
    form.set_field(element::ACCESS_TOKEN, &args.access_token);

    let dispatcher = Arc::new(RequestDispatcher::new(&args.api_url)?);
    let button = ScheduleButton::new(dispatcher, Arc::new(TerminalPage { form }));

    button.click().await?;

    Ok(())
}
