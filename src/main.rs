#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod app;
mod booking;
mod http_handler;
mod keychain;
mod logger;
mod timetable;

use crate::http_handler::http_request::me_get::MeRequest;
use crate::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use crate::keychain::Keychain;
use crate::timetable::layout;
use chrono::Local;
use fixed::types::I32F32;
use std::{env, time::Duration};

const REFRESH_INTERVAL: Duration = Duration::from_secs(60);
/// Container width the headless loop assumes; a real UI layer feeds in its
/// measured width instead.
const DEFAULT_CONTAINER_WIDTH: i32 = 1000;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let base_url_var = env::var("CLUBSPACE_BASE_URL");
    let base_url = base_url_var.as_ref().map_or("http://localhost:8080/api", |v| v.as_str());
    let token = env::var("CLUBSPACE_TOKEN").ok();
    let keychain = init(base_url, token.as_deref()).await;

    let r_cont = keychain.r_cont();
    loop {
        let today = Local::now().date_naive();
        match r_cont.fetch_daily(today).await {
            Ok(()) => {
                let window = keychain.app().read().await.daily_window();
                let reservations = r_cont.snapshot().await;
                let blocks = layout::daily_layout(
                    &reservations,
                    today,
                    window,
                    I32F32::from_num(DEFAULT_CONTAINER_WIDTH),
                );
                info!("{} reservations on {today}", blocks.len());
                for block in &blocks {
                    log!(
                        "column {} top {}px height {}px ({:?})",
                        block.geometry.column,
                        block.geometry.top,
                        block.geometry.height,
                        block.style
                    );
                }
            }
            Err(e) => error!("Fetching today's reservations failed: {e}"),
        }
        tokio::time::sleep(REFRESH_INTERVAL).await;
    }
}

async fn init(url: &str, token: Option<&str>) -> Keychain {
    let keychain = Keychain::new(url, token);
    match (MeRequest {}.send_request(&keychain.client()).await) {
        Ok(response) => {
            let user = response.into_user();
            info!("Signed in as {} ({})", user.name(), user.club().label());
            keychain.app().write().await.set_user(Some(user));
        }
        Err(e) => fatal!("Could not load the current user: {e}"),
    }
    keychain
}
