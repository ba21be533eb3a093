use crate::config::EngineConfig;
use crate::error::GenerationError;
use crate::sink::{self, DocumentKind, GeneratedDocument};
use crate::template::Template;
use carta_render_core::Canvas;
use carta_render_lopdf::LopdfCanvas;
use carta_style::PageSpec;
use carta_types::RenderRequest;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-stage wall-clock timings of one generation call, reported at debug
/// level.
#[derive(Debug, Default)]
struct Metrics {
    stage_timings: Vec<(&'static str, Duration)>,
}

impl Metrics {
    fn time_scope<F, R>(&mut self, name: &'static str, func: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = func();
        self.stage_timings.push((name, start.elapsed()));
        result
    }

    fn report(&self, filename: &str) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        let total: Duration = self.stage_timings.iter().map(|(_, d)| *d).sum();
        for (name, duration) in &self.stage_timings {
            log::debug!("{filename}: {name} took {:.2}ms", duration.as_secs_f64() * 1000.0);
        }
        log::debug!("{filename}: total {:.2}ms", total.as_secs_f64() * 1000.0);
    }
}

/// Entry point of the engine: turns a [`RenderRequest`] into a finished
/// menu or table tent.
///
/// Each call builds its own canvas, cursor and palette, so a generator can
/// be shared across threads and requests.
#[derive(Debug, Clone, Default)]
pub struct MenuGenerator {
    config: EngineConfig,
}

impl MenuGenerator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The template the request asks for, or the configured default.
    pub fn template_for(&self, request: &RenderRequest) -> Template {
        Template::resolve(&request.options.template, self.config.default_template)
    }

    /// Lays the menu out on any canvas. The canvas should be A4 portrait
    /// with its first page open.
    pub fn render_menu_on<C: Canvas + ?Sized>(&self, request: &RenderRequest, canvas: &mut C) {
        self.template_for(request).render_menu(canvas, request, &self.config);
    }

    pub fn render_table_tent_on<C: Canvas + ?Sized>(&self, request: &RenderRequest, canvas: &mut C) {
        self.template_for(request)
            .render_table_tent(canvas, request, &self.config);
    }

    pub fn generate_menu_document(&self, request: &RenderRequest) -> Result<GeneratedDocument, GenerationError> {
        let template = self.template_for(request);
        let mut metrics = Metrics::default();
        let mut canvas = LopdfCanvas::for_page(PageSpec::A4_PORTRAIT);

        metrics.time_scope("layout", || template.render_menu(&mut canvas, request, &self.config));
        let document = metrics.time_scope("serialize", || {
            sink::emit(
                canvas,
                &request.restaurant.name,
                template,
                DocumentKind::Menu,
                &self.config,
            )
        })?;
        metrics.report(&document.filename);
        Ok(document)
    }

    /// Fails before any drawing when the requested tent format or
    /// orientation is not recognized.
    pub fn generate_table_tent_document(
        &self,
        request: &RenderRequest,
    ) -> Result<GeneratedDocument, GenerationError> {
        let spec = PageSpec::parse(&request.options.tent_format, &request.options.tent_orientation)?;
        let template = self.template_for(request);
        let mut metrics = Metrics::default();
        let mut canvas = LopdfCanvas::for_page(spec);

        metrics.time_scope("layout", || {
            template.render_table_tent(&mut canvas, request, &self.config)
        });
        let document = metrics.time_scope("serialize", || {
            sink::emit(
                canvas,
                &request.restaurant.name,
                template,
                DocumentKind::TableTent,
                &self.config,
            )
        })?;
        metrics.report(&document.filename);
        Ok(document)
    }

    pub fn generate(
        &self,
        request: &RenderRequest,
        kind: DocumentKind,
    ) -> Result<GeneratedDocument, GenerationError> {
        match kind {
            DocumentKind::Menu => self.generate_menu_document(request),
            DocumentKind::TableTent => self.generate_table_tent_document(request),
        }
    }

    /// Generates one document per request. Results keep the order of
    /// `requests`; one failure does not affect the others.
    pub fn generate_batch(
        &self,
        requests: &[RenderRequest],
        kind: DocumentKind,
    ) -> Vec<Result<GeneratedDocument, GenerationError>> {
        #[cfg(feature = "parallel")]
        {
            requests.par_iter().map(|r| self.generate(r, kind)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            requests.iter().map(|r| self.generate(r, kind)).collect()
        }
    }
}
