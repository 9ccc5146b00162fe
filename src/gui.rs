use crate::policy::PolicyTable;
use crate::projection::{ObtainabilityClass, format_amount};
use crate::statics;
use crate::store::Filter;
use crate::{
    BrowserConfig, CatalogDocument, CatalogError, CatalogSource, CatalogStore, FileSource,
    LoadState, PriceMode, SortMode,
};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::{
    path::PathBuf,
    sync::mpsc::{self, TryRecvError},
    thread,
    time::Duration,
};

type LoadResult = Result<CatalogDocument, CatalogError>;

pub fn run_gui(config: BrowserConfig) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 900.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(CatalogApp::new(config)))),
    )
}

/// The viewer: owns one `CatalogStore` per loaded catalog and forwards UI events
/// to its command methods. Everything it draws comes from the store's reads.
struct CatalogApp {
    config: BrowserConfig,
    store: CatalogStore,
    pending: Option<mpsc::Receiver<LoadResult>>,
    has_source: bool,
    query_buffer: String,
    dialog_dir: Option<PathBuf>,
    policy_open: bool,
    theme_dark: bool,
    status: String,
}

impl CatalogApp {
    fn new(config: BrowserConfig) -> Self {
        let mut app = Self {
            store: CatalogStore::new(&config),
            config,
            pending: None,
            has_source: false,
            query_buffer: String::new(),
            dialog_dir: None,
            policy_open: false,
            theme_dark: true,
            status: String::new(),
        };
        if let Some(path) = app.config.catalog_path.clone() {
            app.dialog_dir = path.parent().map(PathBuf::from);
            app.start_load(Box::new(FileSource::new(path)));
        }
        app
    }

    /// Begin a new session: fresh store, document loaded off the UI thread.
    fn start_load(&mut self, source: Box<dyn CatalogSource>) {
        self.store = CatalogStore::new(&self.config);
        self.query_buffer.clear();
        self.has_source = true;
        self.status = format!("Loading {}", source.describe());
        log::info!("loading catalog from {}", source.describe());

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver is gone only if a newer load replaced this one.
            let _ = tx.send(source.load());
        });
        self.pending = Some(rx);
    }

    fn poll_load(&mut self) {
        let Some(rx) = self.pending.as_ref() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(CatalogError::LoaderGone),
        };
        self.pending = None;
        self.store.finish_load(result);

        self.status = match self.store.load_state() {
            LoadState::Ready => {
                let doc = self.store.document();
                let title = doc
                    .map(|d| d.title.as_str())
                    .filter(|t| !t.is_empty())
                    .unwrap_or(statics::EN_APP_TITLE);
                format!("{title}: {} items", self.store.items().len())
            }
            LoadState::Failed(_) | LoadState::Loading => String::new(),
        };
    }

    fn file_dialog(&self) -> rfd::FileDialog {
        let mut dlg = rfd::FileDialog::new().add_filter("Price catalog", &["json", "json5", "gz"]);
        if let Some(dir) = self.dialog_dir.clone() {
            dlg = dlg.set_directory(dir);
        }
        dlg
    }

    fn open_file(&mut self) {
        let Some(path) = self.file_dialog().pick_file() else {
            return;
        };
        self.dialog_dir = path.parent().map(PathBuf::from);
        self.start_load(Box::new(FileSource::new(path)));
    }

    fn badge_color(class: ObtainabilityClass) -> egui::Color32 {
        match class {
            ObtainabilityClass::Farmable => egui::Color32::from_rgb(0, 160, 0),
            ObtainabilityClass::Limited => egui::Color32::from_rgb(220, 0, 0),
            ObtainabilityClass::Standard => egui::Color32::from_rgb(0, 120, 255),
            ObtainabilityClass::Other => egui::Color32::GRAY,
        }
    }

    fn render_filters(&mut self, ui: &mut egui::Ui) {
        ui.heading(statics::EN_HEADING_FILTERS);
        ui.separator();

        ui.horizontal(|ui| {
            ui.label(statics::EN_LABEL_SEARCH);
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.query_buffer)
                    .hint_text(statics::EN_HINT_SEARCH),
            );
            if resp.changed() {
                self.store.set_query(self.query_buffer.clone());
            }
            if ui.small_button(statics::EN_BTN_CLEAR).clicked() {
                self.query_buffer.clear();
                self.store.clear_query();
            }
        });

        ui.horizontal_wrapped(|ui| {
            ui.label(statics::EN_LABEL_SORT);
            let current = self.store.view().sort;
            for mode in SortMode::ALL {
                if ui.selectable_label(current == mode, mode.label()).clicked() {
                    self.store.set_sort_mode(mode);
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label(statics::EN_LABEL_PRICE);
            let current = self.store.view().price_mode;
            for mode in [PriceMode::Stack, PriceMode::Unit] {
                if ui.selectable_label(current == mode, mode.label()).clicked() {
                    self.store.set_price_mode(mode);
                }
            }
        });
        ui.separator();

        ui.strong(statics::EN_HEADING_OBTAINABILITY);
        ui.horizontal_wrapped(|ui| {
            let current = self.store.view().obtainability.clone();
            if ui
                .selectable_label(current == Filter::All, statics::EN_LABEL_ALL)
                .clicked()
            {
                self.store.set_obtainability_filter(statics::FILTER_ALL);
            }
            for tag in self.store.obtainability_options() {
                let selected = current.as_str() == tag && current != Filter::All;
                if ui.selectable_label(selected, tag.as_str()).clicked() {
                    self.store.set_obtainability_filter(&tag);
                }
            }
        });
        ui.separator();

        ui.strong(statics::EN_HEADING_CATEGORIES);
        let current = self.store.view().category.clone();
        let counts = self.store.category_counts();
        let total = self.store.items().len();
        ui.push_id("categories_scroll", |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let all_text = format!("{} ({total})", statics::EN_LABEL_ALL);
                    if ui
                        .selectable_label(current == Filter::All, all_text)
                        .clicked()
                    {
                        self.store.set_category_filter(statics::FILTER_ALL);
                    }
                    for (category, count) in &counts {
                        let selected =
                            current != Filter::All && current.as_str() == category.as_str();
                        if ui
                            .selectable_label(selected, format!("{category} ({count})"))
                            .clicked()
                        {
                            self.store.set_category_filter(category);
                        }
                    }
                });
        });
    }

    fn render_stats(&self, ui: &mut egui::Ui) {
        let stats = self.store.stats();
        let currency = self.store.currency();
        ui.horizontal_wrapped(|ui| {
            ui.label(format!("{} {}", statics::EN_STATS_TOTAL, stats.total_count));
            ui.separator();
            ui.label(format!("{} {}", statics::EN_STATS_MATCHED, stats.matched_count));
            ui.separator();
            ui.label(format!("{} {}", statics::EN_STATS_SHOWN, stats.rendered_count));
            ui.separator();
            ui.label(format!(
                "{} {}",
                statics::EN_STATS_UNKNOWN,
                stats.unknown_price_count
            ));
            ui.separator();
            ui.label(format!(
                "{} {} {currency}",
                statics::EN_STATS_AVERAGE,
                format_amount(stats.average_known_price)
            ));
        });
        if let Some(doc) = self.store.document()
            && !doc.pricing_note.trim().is_empty()
        {
            ui.small(&doc.pricing_note);
        }
    }

    fn render_table(&mut self, ui: &mut egui::Ui) {
        let rows = self.store.visible_rows();
        if rows.is_empty() {
            ui.label(statics::EN_SEARCH_NO_MATCHES);
            return;
        }

        let row_h = ui.text_style_height(&egui::TextStyle::Body) * 2.0 + 8.0;
        let mut show_more = false;
        ui.push_id("catalog_scroll", |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.push_id("catalog_table", |ui| {
                        TableBuilder::new(ui)
                            .striped(true)
                            .vscroll(false)
                            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                            .column(Column::initial(280.0).resizable(true))
                            .column(Column::initial(180.0).resizable(true))
                            .column(Column::initial(120.0).resizable(true))
                            .column(Column::initial(100.0).resizable(true))
                            .column(Column::initial(120.0).resizable(true))
                            .column(Column::remainder().resizable(true))
                            .header(row_h / 2.0, |#[allow(unused_mut)] mut header| {
                                for title in [
                                    statics::EN_COL_NAME,
                                    statics::EN_COL_CATEGORY,
                                    statics::EN_COL_OBTAINABILITY,
                                    statics::EN_COL_TRADE_UNIT,
                                    statics::EN_COL_PRICE,
                                    statics::EN_COL_MINIMUM,
                                ] {
                                    header.col(|ui| {
                                        ui.strong(title);
                                    });
                                }
                            })
                            .body(|#[allow(unused_mut)] mut body| {
                                for r in &rows {
                                    body.row(row_h, |#[allow(unused_mut)] mut row| {
                                        row.col(|ui| {
                                            ui.vertical(|ui| {
                                                ui.label(&r.title);
                                                ui.small(&r.subtitle);
                                            });
                                        });
                                        row.col(|ui| {
                                            ui.label(&r.category);
                                        });
                                        row.col(|ui| {
                                            ui.colored_label(
                                                Self::badge_color(r.badge),
                                                &r.obtainability,
                                            );
                                        });
                                        row.col(|ui| {
                                            ui.label(&r.trade_unit);
                                        });
                                        row.col(|ui| {
                                            if r.price_known {
                                                ui.monospace(&r.price_text);
                                            } else {
                                                ui.weak(&r.price_text);
                                            }
                                        });
                                        row.col(|ui| {
                                            ui.label(
                                                r.minimum_price_text
                                                    .as_deref()
                                                    .unwrap_or(statics::EN_EMPTY),
                                            );
                                        });
                                    });
                                }
                            });
                    });

                    if self.store.has_more() {
                        ui.add_space(6.0);
                        if ui.button(statics::EN_BTN_SHOW_MORE).clicked() {
                            show_more = true;
                        }
                    }
                });
        });

        if show_more {
            self.store.show_more();
        }
    }

    fn render_policy_table(ui: &mut egui::Ui, idx: usize, table: &PolicyTable) {
        ui.strong(table.title);
        egui::Grid::new(("policy_table", idx))
            .striped(true)
            .show(ui, |ui| {
                for col in &table.columns {
                    ui.strong(*col);
                }
                ui.end_row();
                for row in &table.rows {
                    for cell in row {
                        ui.label(cell);
                    }
                    ui.end_row();
                }
            });
        ui.add_space(8.0);
    }

    fn render_policy_window(&mut self, ctx: &egui::Context) {
        let mut open = self.policy_open;
        let tables = self.store.policy_tables();
        let policy = self.store.document().and_then(|d| d.policy.as_ref());
        egui::Window::new(statics::EN_WINDOW_POLICY)
            .collapsible(false)
            .vscroll(true)
            .open(&mut open)
            .show(ctx, |ui| {
                if let Some(policy) = policy {
                    if !policy.code_title.is_empty() {
                        ui.heading(&policy.code_title);
                    }
                    if !policy.approval.date.is_empty() {
                        ui.label(format!(
                            "{} {}",
                            statics::EN_LABEL_APPROVED,
                            policy.approval.date
                        ));
                    }
                    for official in &policy.approval.officials {
                        ui.small(format!("{}: {}", official.role, official.name));
                    }
                    if !policy.anti_dumping.rule.is_empty() {
                        ui.label(&policy.anti_dumping.rule);
                    }
                    ui.separator();
                }
                for (idx, table) in tables.iter().enumerate() {
                    Self::render_policy_table(ui, idx, table);
                }
            });
        self.policy_open = open;
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        if self.pending.is_some() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button(statics::EN_BTN_OPEN).clicked() {
                    self.open_file();
                }

                let has_policy = self
                    .store
                    .document()
                    .is_some_and(|d| d.policy.is_some());
                if ui
                    .add_enabled(has_policy, egui::Button::new(statics::EN_BTN_POLICY))
                    .clicked()
                {
                    self.policy_open = true;
                }

                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        if let LoadState::Failed(err) = self.store.load_state() {
            let err = err.clone();
            egui::TopBottomPanel::top("error_bar").show(ctx, |ui| {
                ui.colored_label(egui::Color32::RED, format!("Failed to load: {err}"));
            });
        }

        if self.policy_open {
            self.render_policy_window(ctx);
        }

        match self.store.load_state() {
            LoadState::Ready => {}
            LoadState::Loading => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading(statics::EN_APP_TITLE);
                    if self.has_source {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(statics::EN_HOME_LOADING);
                        });
                    } else {
                        ui.label(statics::EN_HOME_INSTRUCTIONS);
                    }
                });
                return;
            }
            LoadState::Failed(_) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading(statics::EN_APP_TITLE);
                    ui.label(statics::EN_HOME_FAILED);
                });
                return;
            }
        }

        egui::SidePanel::left("filters_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                self.render_filters(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_stats(ui);
            ui.separator();
            self.render_table(ui);
        });
    }
}
