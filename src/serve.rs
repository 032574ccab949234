//! HTTP boundary for the interactive dashboard
//!
//! `lyricstat --data-dir ./data` → starts server, opens browser, serves the
//! embedded UI. Every `/api/view` request is one synchronous recompute
//! against the startup-loaded tables.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tiny_http::{Header, Method, Request, Response, Server};

use crate::dashboard::{ClickEvent, Dataset, Trigger, ViewRequest, update_view};

// Embed the UI directly in the binary
const UI_HTML: &str = include_str!("ui.html");

#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self { ok: true, data: Some(data), error: None }
    }

    fn failure(error: String) -> Self {
        Self { ok: false, data: None, error: Some(error) }
    }
}

#[derive(Deserialize)]
struct ViewParams {
    #[serde(default)]
    selection: Vec<String>,
    #[serde(default)]
    dark_mode: bool,
    trigger: TriggerParams,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
enum TriggerParams {
    Selection,
    Theme,
    Click { series_index: usize, value: String },
}

#[derive(Serialize)]
struct ViewPayload {
    option: serde_json::Value,
    selection: Vec<String>,
    smallest_date: String,
    biggest_date: String,
}

/// Start the server, open a browser, and serve until killed
pub fn start(port: u16, dataset: Dataset) -> Result<()> {
    let addr = format!("127.0.0.1:{}", port);
    let server = Server::http(&addr)
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;

    let url = format!("http://localhost:{}", port);
    eprintln!("Dashboard at {}", url);
    let _ = open::that(&url);

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &dataset) {
            eprintln!("Request error: {}", e);
        }
    }

    Ok(())
}

fn handle_request(mut request: Request, dataset: &Dataset) -> std::io::Result<()> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("/");
    let method = request.method().clone();

    match (&method, path) {
        // Serve embedded UI with the band options injected
        (&Method::Get, "/") => {
            let options =
                serde_json::to_string(&dataset.band_names()).unwrap_or_else(|_| "[]".to_string());
            let html = UI_HTML.replace("{{BAND_OPTIONS}}", &options);
            let response = Response::from_string(html)
                .with_header(Header::from_bytes(&b"Content-Type"[..], &b"text/html"[..]).unwrap());
            request.respond(response)
        }

        // API: recompute the figure for the current selection/theme/click
        (&Method::Post, "/api/view") => {
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body)?;

            match serde_json::from_str::<ViewParams>(&body) {
                Ok(params) => {
                    let update = update_view(dataset, &to_view_request(params));
                    let payload = ViewPayload {
                        option: serde_json::to_value(&update.chart)?,
                        selection: update.selection,
                        smallest_date: format_date(update.smallest_date),
                        biggest_date: format_date(update.biggest_date),
                    };
                    respond_json(request, 200, &ApiResponse::success(payload))
                }
                // Malformed click payloads surface as a generic failure
                Err(e) => respond_json(
                    request,
                    400,
                    &ApiResponse::<ViewPayload>::failure(format!("Bad interaction payload: {}", e)),
                ),
            }
        }

        // 404
        _ => {
            let response = Response::from_string("Not found").with_status_code(404);
            request.respond(response)
        }
    }
}

fn to_view_request(params: ViewParams) -> ViewRequest {
    let trigger = match params.trigger {
        TriggerParams::Selection => Trigger::SelectionChanged,
        TriggerParams::Theme => Trigger::ThemeToggled,
        TriggerParams::Click { series_index, value } => {
            Trigger::ChartClicked(ClickEvent { series_index, value })
        }
    };
    ViewRequest {
        selection: params.selection,
        dark_mode: params.dark_mode,
        trigger,
    }
}

fn format_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn respond_json<T: Serialize>(
    request: Request,
    status: u16,
    body: &ApiResponse<T>,
) -> std::io::Result<()> {
    let json = serde_json::to_string(body)?;
    let response = Response::from_string(json)
        .with_status_code(status)
        .with_header(Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap());
    request.respond(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_params_accept_click_trigger() {
        let params: ViewParams = serde_json::from_str(
            r#"{"selection":["STARSET"],"dark_mode":true,
                "trigger":{"kind":"click","series_index":0,"value":"Architects"}}"#,
        )
        .unwrap();
        let request = to_view_request(params);
        match request.trigger {
            Trigger::ChartClicked(click) => {
                assert_eq!(click.series_index, 0);
                assert_eq!(click.value, "Architects");
            }
            _ => panic!("Expected click trigger"),
        }
        assert!(request.dark_mode);
    }

    #[test]
    fn view_params_reject_unknown_trigger() {
        let result =
            serde_json::from_str::<ViewParams>(r#"{"trigger":{"kind":"hover","value":"x"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_fields_default_to_unfiltered_light_view() {
        let params: ViewParams =
            serde_json::from_str(r#"{"trigger":{"kind":"selection"}}"#).unwrap();
        assert!(params.selection.is_empty());
        assert!(!params.dark_mode);
    }
}
