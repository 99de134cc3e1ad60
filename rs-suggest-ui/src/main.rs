use std::collections::HashSet;
use std::time::Duration;

use eframe::{Frame, egui};
use egui::Context;

use reqwest::Result;
use reqwest::StatusCode;
use reqwest::blocking::Client;

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client })
    }

    /// Sends a GET request to `/v1/suggest` for the given prefix.
    ///
    /// `Ok(None)` is the no-suggestions outcome (the server spells it 404);
    /// transport and server errors stay in `Err`.
    fn get_suggestions(&self, prefix: &str) -> Result<Option<Vec<String>>> {
        let response = self.client
            .get("http://127.0.0.1:5000/v1/suggest")
            .query(&[("prefix", prefix)])
            .send()?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response.error_for_status()?.text()?;
        Ok(Some(body.lines().map(str::to_owned).collect()))
    }

    /// Sends a GET request to `/v1/corpora`.
    fn get_corpora(&self) -> Result<String> {
        let response = self.client
            .get("http://127.0.0.1:5000/v1/corpora")
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }

    /// Sends a GET request to `/v1/loaded_corpora`.
    fn get_loaded_corpora(&self) -> Result<String> {
        let response = self.client
            .get("http://127.0.0.1:5000/v1/loaded_corpora")
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }

    /// Sends a PUT request to `/v1/load_corpora` with the given names.
    fn put_load_corpora(&self, names: &str) -> Result<String> {
        let response = self.client
            .put("http://127.0.0.1:5000/v1/load_corpora")
            .query(&[("names", names)])
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }
}

/// Global UI state (MUST persist between frames in egui).
struct SuggestUI {
    rest: RESTContext,

    query: String,
    suggestions: Vec<String>,
    status: Option<String>,

    available_corpora: Vec<String>,   // corpora the server can load
    loaded_corpora: HashSet<String>,  // corpora currently in the session
}

impl SuggestUI {
    /// Initializes the UI and pulls the corpus lists from the server.
    fn new() -> Result<Self> {
        let mut app = Self {
            rest: RESTContext::new()?,

            query: String::new(),
            suggestions: Vec::new(),
            status: None,

            available_corpora: Vec::new(),
            loaded_corpora: HashSet::new(),
        };
        app.refresh_corpora();
        app.fetch_suggestions();
        Ok(app)
    }

    /// Fetches suggestions for the current query.
    fn fetch_suggestions(&mut self) {
        match self.rest.get_suggestions(&self.query) {
            Ok(Some(suggestions)) => {
                self.status = None;
                self.suggestions = suggestions;
            }
            Ok(None) => {
                self.status = Some("No suggestions found.".to_owned());
                self.suggestions.clear();
            }
            Err(e) => {
                self.status = Some(format!("Error: {e}"));
                self.suggestions.clear();
            }
        }
    }

    /// Pulls the available and loaded corpus lists.
    fn refresh_corpora(&mut self) {
        match self.rest.get_corpora() {
            Ok(names) => {
                self.available_corpora = names
                    .lines()
                    .map(|s| s.trim().to_owned())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
        match self.rest.get_loaded_corpora() {
            Ok(names) => {
                self.loaded_corpora = names
                    .lines()
                    .map(|s| s.trim().to_owned())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Pushes the current corpus selection to the server.
    fn push_corpus_selection(&mut self) {
        let names = self.loaded_corpora.iter().cloned().collect::<Vec<_>>();
        match self.rest.put_load_corpora(&names.join(",")) {
            Ok(_) => self.fetch_suggestions(),
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }
}

impl eframe::App for SuggestUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Query");
                if ui.text_edit_singleline(&mut self.query).changed() {
                    self.fetch_suggestions();
                }
            });

            ui.separator();

            if let Some(status) = &self.status {
                ui.label(status);
            } else {
                ui.label(format!("{} suggestion(s)", self.suggestions.len()));
            }

            egui::ScrollArea::vertical()
                .max_height(220.0)
                .show(ui, |ui| {
                    for suggestion in &self.suggestions {
                        if suggestion.is_empty() {
                            ui.label("(end of a recorded sentence)");
                        } else {
                            ui.label(suggestion);
                        }
                    }
                });

            ui.separator();
            ui.label("Corpora");

            let mut selection_changed = false;
            for corpus in &self.available_corpora {
                let mut checked = self.loaded_corpora.contains(corpus);

                if ui.checkbox(&mut checked, corpus).changed() {
                    if checked {
                        selection_changed = true;
                        self.loaded_corpora.insert(corpus.clone());
                    } else if self.loaded_corpora.len() > 1 {
                        selection_changed = true;
                        self.loaded_corpora.remove(corpus);
                    }
                }
            }

            if selection_changed {
                self.push_corpus_selection();
            }
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 420.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "rs-suggest",
        options,
        Box::new(|_| Ok(Box::new(SuggestUI::new()?))),
    )
}
