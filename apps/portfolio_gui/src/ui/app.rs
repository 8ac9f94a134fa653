//! App shell: one scrollable page of sections, revealed as they enter the
//! viewport, plus the contact form wired to the backend worker.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::{RichText, TextureHandle};
use portfolio_core::{
    IntersectionEvent, IntersectionSource, RevealController, RevealTargetId, SubmissionState,
};
use site_content::Catalog;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::ContactViewState;
use crate::ui::{theme, widgets};

const REVEAL_FADE_SECONDS: f32 = 0.45;
const PAGE_MAX_WIDTH: f32 = 1040.0;
const PORTRAIT_SLUG: &str = "__portrait";

/// Frame-driven stand-in for a platform intersection observer: the set of
/// targets whose rects still need measuring each frame.
#[derive(Default)]
pub struct WatchSet {
    watched: HashSet<RevealTargetId>,
}

impl WatchSet {
    pub fn is_watched(&self, target: RevealTargetId) -> bool {
        self.watched.contains(&target)
    }
}

impl IntersectionSource for WatchSet {
    fn subscribe(&mut self, target: RevealTargetId) {
        self.watched.insert(target);
    }

    fn unsubscribe(&mut self, target: RevealTargetId) {
        self.watched.remove(&target);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionAnchor {
    About,
    Projects,
    Services,
    Contact,
}

/// Reveal handles for everything marked on the page, allocated once at
/// mount. Sections and individual cards reveal independently, like the
/// site's per-card `data-reveal` markers.
struct RevealIds {
    header: RevealTargetId,
    hero: RevealTargetId,
    about: RevealTargetId,
    projects: RevealTargetId,
    services: RevealTargetId,
    contact: RevealTargetId,
    project_cards: Vec<RevealTargetId>,
    service_cards: Vec<RevealTargetId>,
}

impl RevealIds {
    fn allocate(project_count: usize, service_count: usize) -> Self {
        let mut next = 0u64;
        let mut take = || {
            let id = RevealTargetId(next);
            next += 1;
            id
        };
        Self {
            header: take(),
            hero: take(),
            about: take(),
            projects: take(),
            services: take(),
            contact: take(),
            project_cards: (0..project_count).map(|_| take()).collect(),
            service_cards: (0..service_count).map(|_| take()).collect(),
        }
    }

    fn all(&self) -> Vec<RevealTargetId> {
        let mut ids = vec![
            self.header,
            self.hero,
            self.about,
            self.projects,
            self.services,
            self.contact,
        ];
        ids.extend(&self.project_cards);
        ids.extend(&self.service_cards);
        ids
    }
}

enum ProjectImage {
    Pending,
    Ready(TextureHandle),
    Failed,
}

pub struct PortfolioApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    catalog: Catalog,
    assets_dir: PathBuf,

    reveal: RevealController<WatchSet>,
    ids: RevealIds,

    contact: ContactViewState,
    project_images: HashMap<String, ProjectImage>,

    status: String,
    worker_ready: bool,
    pending_scroll: Option<SectionAnchor>,
    scroll_to_top: bool,
}

impl PortfolioApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        catalog: Catalog,
        settings: Settings,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        theme::apply(&cc.egui_ctx);

        let ids = RevealIds::allocate(catalog.projects.len(), catalog.focus_areas.len());
        let source = if settings.reduce_motion {
            tracing::info!("reveal animations disabled; showing all sections immediately");
            None
        } else {
            Some(WatchSet::default())
        };
        let reveal = RevealController::mount(ids.all(), source);

        let mut app = Self {
            cmd_tx,
            ui_rx,
            catalog,
            assets_dir: settings.assets_dir,
            reveal,
            ids,
            contact: ContactViewState::new(),
            project_images: HashMap::new(),
            status: String::new(),
            worker_ready: false,
            pending_scroll: None,
            scroll_to_top: true,
        };
        app.request_images();
        app
    }

    fn request_images(&mut self) {
        let mut requests: Vec<(String, String)> = self
            .catalog
            .projects
            .iter()
            .map(|project| (project.slug(), project.image.clone()))
            .collect();
        requests.push((
            PORTRAIT_SLUG.to_string(),
            self.catalog.profile.portrait_image.clone(),
        ));

        for (slug, file_name) in requests {
            let path = self.assets_dir.join(file_name);
            self.project_images
                .insert(slug.clone(), ProjectImage::Pending);
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::LoadProjectImage { slug, path },
                &mut self.status,
            );
        }
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::WorkerReady => {
                    self.worker_ready = true;
                    self.status.clear();
                }
                UiEvent::ContactSettled { outcome } => {
                    self.contact.apply_outcome(outcome);
                }
                UiEvent::ProjectImageLoaded {
                    slug,
                    width,
                    height,
                    rgba,
                } => {
                    let color = egui::ColorImage::from_rgba_unmultiplied([width, height], &rgba);
                    let texture = ctx.load_texture(
                        format!("project-{slug}"),
                        color,
                        egui::TextureOptions::LINEAR,
                    );
                    self.project_images.insert(slug, ProjectImage::Ready(texture));
                }
                UiEvent::ProjectImageFailed { slug, reason } => {
                    tracing::warn!(%slug, %reason, "project image unavailable");
                    self.project_images.insert(slug, ProjectImage::Failed);
                    self.status = UiError::new(UiErrorContext::Assets, reason).user_message();
                }
                UiEvent::Error(err) => {
                    tracing::error!(context = ?err.context(), "worker error: {}", err.message());
                    self.status = err.user_message();
                }
            }
        }
    }

    /// Renders a reveal-tracked block: faded and offset while hidden,
    /// measured against the scroll viewport afterwards so the controller
    /// can flip it visible.
    fn revealed_block(
        &mut self,
        ui: &mut egui::Ui,
        id: RevealTargetId,
        anchor: Option<SectionAnchor>,
        add_contents: fn(&mut Self, &mut egui::Ui),
    ) {
        let viewport = ui.clip_rect();
        let shown = self.reveal.is_visible(id);
        let t = ui
            .ctx()
            .animate_bool_with_time(egui::Id::new(("reveal", id.0)), shown, REVEAL_FADE_SECONDS);

        let response = ui
            .scope(|ui| {
                ui.add_space((1.0 - t) * 24.0);
                ui.multiply_opacity(t);
                add_contents(self, ui);
            })
            .response;

        if anchor.is_some() && self.pending_scroll == anchor {
            response.scroll_to_me(Some(egui::Align::TOP));
            self.pending_scroll = None;
        }
        observe(&mut self.reveal, id, response.rect, viewport);
    }

    fn page(&mut self, ui: &mut egui::Ui) {
        self.revealed_block(ui, self.ids.header, None, Self::header_section);
        ui.add_space(28.0);
        self.revealed_block(ui, self.ids.hero, None, Self::hero_section);
        ui.add_space(48.0);
        self.revealed_block(
            ui,
            self.ids.about,
            Some(SectionAnchor::About),
            Self::about_section,
        );
        ui.add_space(48.0);
        self.revealed_block(
            ui,
            self.ids.projects,
            Some(SectionAnchor::Projects),
            Self::projects_section,
        );
        ui.add_space(48.0);
        self.revealed_block(
            ui,
            self.ids.services,
            Some(SectionAnchor::Services),
            Self::services_section,
        );
        ui.add_space(48.0);
        self.revealed_block(
            ui,
            self.ids.contact,
            Some(SectionAnchor::Contact),
            Self::contact_section,
        );
        ui.add_space(64.0);
    }

    fn header_section(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            theme::inner_frame().show(ui, |ui| {
                ui.label(
                    RichText::new(&self.catalog.profile.monogram)
                        .size(16.0)
                        .strong()
                        .color(theme::ACCENT),
                );
            });
            ui.vertical(|ui| {
                widgets::kicker(ui, "Portfolio", theme::MUTED);
                ui.label(RichText::new(&self.catalog.profile.name).color(theme::TEXT));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if widgets::cta_button(ui, "Download CV", false).clicked() {
                    widgets::open_link(ui, &self.catalog.profile.cv_url);
                }
                for (label, anchor) in [
                    ("Contact", SectionAnchor::Contact),
                    ("Services", SectionAnchor::Services),
                    ("Projects", SectionAnchor::Projects),
                    ("About", SectionAnchor::About),
                ] {
                    let nav = ui
                        .add(
                            egui::Label::new(RichText::new(label).color(theme::MUTED))
                                .sense(egui::Sense::click()),
                        )
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if nav.clicked() {
                        self.pending_scroll = Some(anchor);
                    }
                }
            });
        });
    }

    fn hero_section(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            let left = &mut columns[0];
            widgets::kicker(left, &self.catalog.profile.tagline, theme::ACCENT);
            left.add_space(10.0);
            left.label(
                RichText::new(&self.catalog.profile.headline)
                    .size(34.0)
                    .color(theme::TEXT),
            );
            left.add_space(12.0);
            left.label(
                RichText::new(&self.catalog.profile.intro)
                    .size(15.0)
                    .color(theme::MUTED),
            );
            left.add_space(18.0);
            left.horizontal(|ui| {
                if widgets::cta_button(ui, "View work", true).clicked() {
                    self.pending_scroll = Some(SectionAnchor::Projects);
                }
                if widgets::cta_button(ui, "Download CV", false).clicked() {
                    widgets::open_link(ui, &self.catalog.profile.cv_url);
                }
            });

            let right = &mut columns[1];
            self.portrait_card(right);
            right.add_space(12.0);
            theme::glow_frame().show(right, |ui| {
                widgets::kicker(ui, "Quick profile", theme::MUTED);
                ui.add_space(8.0);
                ui.label(format!("Location: {}", self.catalog.profile.location));
                ui.label(format!("Focus: {}", self.catalog.profile.focus_line));
                ui.label(format!("Current: {}", self.catalog.profile.current_study));
            });
            right.add_space(12.0);
            theme::glow_frame().show(right, |ui| {
                widgets::kicker(ui, "Highlights", theme::MUTED);
                ui.add_space(8.0);
                for pair in self.catalog.highlights.chunks(2) {
                    ui.columns(2, |cells| {
                        for (cell, highlight) in cells.iter_mut().zip(pair) {
                            widgets::stat(cell, &highlight.figure, &highlight.label);
                        }
                    });
                    ui.add_space(6.0);
                }
            });
        });
    }

    fn portrait_card(&mut self, ui: &mut egui::Ui) {
        theme::glow_frame().show(ui, |ui| {
            let width = ui.available_width();
            match self.project_images.get(PORTRAIT_SLUG) {
                Some(ProjectImage::Ready(texture)) => {
                    ui.add(
                        egui::Image::new(texture).fit_to_exact_size(egui::vec2(width, 260.0)),
                    );
                }
                Some(ProjectImage::Pending) => {
                    ui.add_sized([width, 260.0], egui::Spinner::new());
                }
                Some(ProjectImage::Failed) | None => {
                    ui.add_sized(
                        [width, 260.0],
                        egui::Label::new(
                            RichText::new(&self.catalog.profile.monogram)
                                .size(64.0)
                                .color(theme::ACCENT.gamma_multiply(0.5)),
                        ),
                    );
                }
            }
        });
    }

    fn about_section(&mut self, ui: &mut egui::Ui) {
        theme::glow_frame().show(ui, |ui| {
            ui.columns(2, |columns| {
                let left = &mut columns[0];
                widgets::kicker(left, "About", theme::ACCENT);
                left.add_space(8.0);
                left.label(
                    RichText::new(&self.catalog.profile.about_heading)
                        .size(24.0)
                        .color(theme::TEXT),
                );
                left.add_space(8.0);
                left.label(
                    RichText::new(&self.catalog.profile.about_body)
                        .size(14.0)
                        .color(theme::MUTED),
                );
                left.add_space(16.0);
                widgets::kicker(left, "Experience", theme::ACCENT);
                left.add_space(6.0);
                for project in &self.catalog.projects {
                    left.horizontal(|ui| {
                        ui.label(RichText::new("•").color(theme::ACCENT));
                        ui.label(RichText::new(&project.title).size(13.0).color(theme::TEXT));
                    });
                }

                let right = &mut columns[1];
                theme::inner_frame().show(right, |ui| {
                    widgets::kicker(ui, "Education", theme::MUTED);
                    ui.add_space(6.0);
                    for entry in &self.catalog.education {
                        ui.label(RichText::new(&entry.degree).strong().color(theme::TEXT));
                        ui.label(
                            RichText::new(&entry.institution)
                                .size(11.0)
                                .color(theme::MUTED),
                        );
                        ui.add_space(6.0);
                    }
                });
                right.add_space(10.0);
                theme::inner_frame().show(right, |ui| {
                    widgets::kicker(ui, "Focus", theme::MUTED);
                    ui.add_space(4.0);
                    ui.label(&self.catalog.profile.focus_line);
                });
                right.add_space(10.0);
                theme::inner_frame().show(right, |ui| {
                    widgets::kicker(ui, "Skills", theme::MUTED);
                    ui.add_space(6.0);
                    ui.horizontal_wrapped(|ui| {
                        for skill in &self.catalog.skills {
                            widgets::chip(ui, skill);
                        }
                    });
                });
            });
        });
    }

    fn projects_section(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                widgets::section_heading(ui, "Projects", "Selected work and research");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Max), |ui| {
                widgets::link_text(ui, "See more", &self.catalog.projects_index_url);
            });
        });
        ui.add_space(16.0);

        let count = self.catalog.projects.len();
        let mut idx = 0;
        while idx < count {
            let row: Vec<usize> = (idx..(idx + 2).min(count)).collect();
            ui.columns(2, |columns| {
                for (column, &card_idx) in columns.iter_mut().zip(&row) {
                    self.project_card(column, card_idx);
                }
            });
            ui.add_space(12.0);
            idx += 2;
        }
    }

    fn project_card(&mut self, ui: &mut egui::Ui, idx: usize) {
        let project = self.catalog.projects[idx].clone();
        let id = self.ids.project_cards[idx];
        let slug = project.slug();

        let viewport = ui.clip_rect();
        let shown = self.reveal.is_visible(id);
        let t = ui
            .ctx()
            .animate_bool_with_time(egui::Id::new(("reveal", id.0)), shown, REVEAL_FADE_SECONDS);

        let response = ui
            .scope(|ui| {
                ui.add_space((1.0 - t) * 16.0);
                ui.multiply_opacity(t);
                theme::glow_frame().show(ui, |ui| {
                    let width = ui.available_width();
                    match self.project_images.get(&slug) {
                        Some(ProjectImage::Ready(texture)) => {
                            ui.add(
                                egui::Image::new(texture)
                                    .fit_to_exact_size(egui::vec2(width, 150.0)),
                            );
                        }
                        Some(ProjectImage::Pending) => {
                            ui.add_sized([width, 150.0], egui::Spinner::new());
                        }
                        Some(ProjectImage::Failed) | None => {
                            ui.add_sized(
                                [width, 150.0],
                                egui::Label::new(
                                    RichText::new(&project.kind)
                                        .color(theme::MUTED.gamma_multiply(0.7)),
                                ),
                            );
                        }
                    }
                    ui.add_space(10.0);
                    widgets::kicker(ui, &project.kind, theme::MUTED);
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(&project.title)
                            .size(16.0)
                            .strong()
                            .color(theme::TEXT),
                    );
                    ui.add_space(8.0);
                    widgets::link_text(ui, "Explore", &project.link);
                });
            })
            .response;

        observe(&mut self.reveal, id, response.rect, viewport);
    }

    fn services_section(&mut self, ui: &mut egui::Ui) {
        widgets::section_heading(ui, "Services", "What I can help you build");
        ui.add_space(16.0);

        let areas = self.catalog.focus_areas.clone();
        let viewport = ui.clip_rect();
        ui.columns(areas.len().max(1), |columns| {
            for (idx, (column, area)) in columns.iter_mut().zip(&areas).enumerate() {
                let id = self.ids.service_cards[idx];
                let shown = self.reveal.is_visible(id);
                let t = column.ctx().animate_bool_with_time(
                    egui::Id::new(("reveal", id.0)),
                    shown,
                    REVEAL_FADE_SECONDS,
                );
                let response = column
                    .scope(|ui| {
                        ui.add_space((1.0 - t) * 16.0);
                        ui.multiply_opacity(t);
                        theme::glow_frame().show(ui, |ui| {
                            ui.label(
                                RichText::new(&area.title)
                                    .size(16.0)
                                    .strong()
                                    .color(theme::TEXT),
                            );
                            ui.add_space(6.0);
                            ui.label(
                                RichText::new(&area.description)
                                    .size(13.0)
                                    .color(theme::MUTED),
                            );
                        });
                    })
                    .response;
                observe(&mut self.reveal, id, response.rect, viewport);
            }
        });
    }

    fn contact_section(&mut self, ui: &mut egui::Ui) {
        theme::glow_frame().show(ui, |ui| {
            ui.columns(2, |columns| {
                let left = &mut columns[0];
                widgets::kicker(left, "Contact", theme::MUTED);
                left.add_space(8.0);
                left.label(
                    RichText::new("Let's build something meaningful.")
                        .size(24.0)
                        .color(theme::TEXT),
                );
                left.add_space(6.0);
                left.label(
                    RichText::new("Email me or connect on social.")
                        .size(13.0)
                        .color(theme::MUTED),
                );

                let right = &mut columns[1];
                right.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    let email = self.catalog.profile.email.clone();
                    widgets::link_text(ui, &email, &format!("mailto:{email}"));
                    ui.label(RichText::new(&self.catalog.profile.phone).color(theme::TEXT));
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        for social in &self.catalog.socials {
                            widgets::link_text(ui, &social.label, &social.url);
                        }
                    });
                });
            });

            ui.add_space(14.0);
            ui.separator();
            ui.add_space(10.0);

            if widgets::cta_button(ui, "Let's talk", true).clicked() {
                self.contact.toggle_open();
            }
            if self.contact.open {
                ui.add_space(10.0);
                self.contact_form(ui);
            }
        });
    }

    fn contact_form(&mut self, ui: &mut egui::Ui) {
        theme::inner_frame().show(ui, |ui| {
            ui.set_max_width(560.0);
            ui.columns(2, |columns| {
                columns[0].label(RichText::new("Name").size(11.0).color(theme::MUTED));
                columns[0].add(
                    egui::TextEdit::singleline(&mut self.contact.form.name)
                        .hint_text("Your name"),
                );
                columns[1].label(RichText::new("Email").size(11.0).color(theme::MUTED));
                columns[1].add(
                    egui::TextEdit::singleline(&mut self.contact.form.email)
                        .hint_text("you@example.com"),
                );
            });
            ui.add_space(8.0);
            ui.label(RichText::new("Message").size(11.0).color(theme::MUTED));
            ui.add(
                egui::TextEdit::multiline(&mut self.contact.form.message)
                    .hint_text("Tell me about your project...")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(10.0);

            let sending = self.contact.state() == SubmissionState::Sending;
            let label = if sending { "Sending..." } else { "Send message" };
            let send = ui.add_enabled_ui(self.contact.can_send() && self.worker_ready, |ui| {
                widgets::cta_button(ui, label, false)
            });
            if send.inner.clicked() {
                self.submit_contact();
            }

            match self.contact.state() {
                SubmissionState::Success => {
                    ui.add_space(6.0);
                    widgets::kicker(ui, "Message sent successfully.", theme::MUTED);
                }
                SubmissionState::Error => {
                    ui.add_space(6.0);
                    widgets::kicker(ui, "Something went wrong. Please try again.", theme::MUTED);
                }
                SubmissionState::Idle | SubmissionState::Sending => {}
            }
        });
    }

    /// Flips the machine to `Sending` before the command is queued, so the
    /// status is correct even for the frame in which the click happened. A
    /// queue refusal settles the attempt immediately as a failure.
    fn submit_contact(&mut self) {
        let Some(payload) = self.contact.begin_submit() else {
            return;
        };
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SubmitContact { payload },
            &mut self.status,
        );
        if !queued {
            self.contact
                .apply_outcome(Err("command queue unavailable".to_string()));
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events(ctx);

        egui::TopBottomPanel::bottom("status_bar")
            .show_separator_line(false)
            .show_animated(ctx, !self.status.is_empty(), |ui| {
                ui.label(RichText::new(&self.status).size(12.0).color(theme::MUTED));
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
                if self.scroll_to_top {
                    // Launch always starts at the top, like the site's
                    // hash-stripping mount effect.
                    scroll = scroll.vertical_scroll_offset(0.0);
                    self.scroll_to_top = false;
                }
                scroll.show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(PAGE_MAX_WIDTH);
                        ui.add_space(20.0);
                        self.page(ui);
                    });
                });
            });

        let animating = !self.reveal.all_visible()
            || self.contact.state() == SubmissionState::Sending;
        if animating {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(150));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.reveal.unmount();
    }
}

fn observe(
    reveal: &mut RevealController<WatchSet>,
    id: RevealTargetId,
    rect: egui::Rect,
    viewport: egui::Rect,
) {
    let watched = reveal.source().is_some_and(|source| source.is_watched(id));
    if !watched {
        return;
    }
    reveal.on_intersection(IntersectionEvent {
        target: id,
        ratio: intersection_ratio(rect, viewport),
    });
}

/// Share of `rect`'s area currently inside `viewport`.
fn intersection_ratio(rect: egui::Rect, viewport: egui::Rect) -> f32 {
    let area = rect.area();
    if area <= f32::EPSILON {
        return 0.0;
    }
    let overlap = rect.intersect(viewport);
    if overlap.is_negative() {
        return 0.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}
