//! Generation lifecycle
//!
//! [`Generator`] is what an external controller drives: it holds the current
//! configuration and presenter, runs `generate` and `clear`, and keeps the
//! most recent [`Dungeon`] around for inspection.

use crate::config::GeneratorConfig;
use crate::dungeon::{Dungeon, generate_dungeon};
use crate::present::{Presenter, RenderError};
use crate::rng::GameRng;

/// Outcome of one `generate` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Seed actually used, replayable via `GeneratorConfig::seed`
    pub seed: u64,
    /// Number of rooms placed
    pub room_count: usize,
    /// Presenter result. An error here is a warning: the layout is still valid.
    pub render: Result<(), RenderError>,
}

impl GenerateReport {
    /// The render warning, if the presenter could not draw the layout
    pub fn warning(&self) -> Option<&RenderError> {
        self.render.as_ref().err()
    }
}

/// Controller-facing dungeon generator
#[derive(Debug)]
pub struct Generator<P: Presenter> {
    config: GeneratorConfig,
    presenter: P,
    dungeon: Option<Dungeon>,
    /// Whether the presenter holds artifacts from a previous run
    rendered: bool,
}

impl<P: Presenter> Generator<P> {
    pub fn new(config: GeneratorConfig, presenter: P) -> Self {
        Self {
            config,
            presenter,
            dungeon: None,
            rendered: false,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Change configuration; takes effect on the next `generate`
    pub fn config_mut(&mut self) -> &mut GeneratorConfig {
        &mut self.config
    }

    /// The most recent layout, if any run has happened
    pub fn dungeon(&self) -> Option<&Dungeon> {
        self.dungeon.as_ref()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Whether the presenter currently shows a layout
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Build a new layout from the current configuration and present it.
    ///
    /// Artifacts of the previous run are released first. A presenter failure
    /// is logged and reported but does not discard the new layout.
    pub fn generate(&mut self) -> GenerateReport {
        if self.rendered {
            self.presenter.clear();
            self.rendered = false;
        }

        let mut rng = GameRng::from_seed_option(self.config.seed);
        let dungeon = generate_dungeon(&self.config, &mut rng);

        let render = self.presenter.render(&dungeon);
        if let Err(e) = &render {
            log::warn!("dungeon generated but not rendered: {}", e);
        }
        // Even a failed render may have left artifacts behind
        self.rendered = true;

        log::info!(
            "generated dungeon: {} rooms, seed {}",
            dungeon.rooms.len(),
            dungeon.seed
        );

        let report = GenerateReport {
            seed: dungeon.seed,
            room_count: dungeon.rooms.len(),
            render,
        };
        self.dungeon = Some(dungeon);
        report
    }

    /// Release the presenter's artifacts for the last rendered layout
    pub fn clear(&mut self) {
        self.presenter.clear();
        self.rendered = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::CellType;

    /// Presenter that records the calls it receives
    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        fail: bool,
        live: usize,
    }

    impl Presenter for Recorder {
        fn render(&mut self, dungeon: &Dungeon) -> Result<(), RenderError> {
            self.calls.push("render");
            if self.fail {
                return Err(RenderError::MissingAssets {
                    cell: CellType::Floor,
                });
            }
            self.live = dungeon.count(CellType::Floor) + dungeon.count(CellType::Wall);
            Ok(())
        }

        fn clear(&mut self) {
            self.calls.push("clear");
            self.live = 0;
        }
    }

    fn seeded(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_generate_does_not_clear() {
        let mut generator = Generator::new(seeded(1), Recorder::default());
        generator.generate();
        assert_eq!(generator.presenter().calls, vec!["render"]);
        assert!(generator.is_rendered());
    }

    #[test]
    fn test_regenerate_clears_first() {
        let mut generator = Generator::new(seeded(1), Recorder::default());
        generator.generate();
        generator.generate();
        assert_eq!(
            generator.presenter().calls,
            vec!["render", "clear", "render"]
        );
    }

    #[test]
    fn test_clear_releases_artifacts() {
        let mut generator = Generator::new(seeded(1), Recorder::default());
        generator.generate();
        assert!(generator.presenter().live > 0);
        generator.clear();
        assert_eq!(generator.presenter().live, 0);
        assert!(!generator.is_rendered());

        // Nothing left to release, so the next run goes straight to render
        generator.generate();
        assert_eq!(
            generator.presenter().calls,
            vec!["render", "clear", "render"]
        );
    }

    #[test]
    fn test_render_failure_keeps_layout() {
        let presenter = Recorder {
            fail: true,
            ..Default::default()
        };
        let mut generator = Generator::new(seeded(5), presenter);
        let report = generator.generate();

        assert!(matches!(
            report.warning(),
            Some(RenderError::MissingAssets { .. })
        ));
        let dungeon = generator.dungeon().unwrap();
        assert_eq!(dungeon.rooms.len(), report.room_count);
        assert!(dungeon.count(CellType::Floor) > 0);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let mut generator = Generator::new(seeded(42), Recorder::default());
        generator.generate();
        let first = generator.dungeon().cloned().unwrap();
        let report = generator.generate();
        assert_eq!(report.seed, 42);
        assert_eq!(generator.dungeon().unwrap(), &first);
    }

    #[test]
    fn test_unseeded_report_is_replayable() {
        let mut generator = Generator::new(GeneratorConfig::default(), Recorder::default());
        let report = generator.generate();
        assert_ne!(report.seed, 0);
        let first = generator.dungeon().cloned().unwrap();

        generator.config_mut().seed = Some(report.seed);
        generator.generate();
        assert_eq!(generator.dungeon().unwrap(), &first);
    }

    #[test]
    fn test_config_change_applies_next_run() {
        let mut generator = Generator::new(seeded(3), Recorder::default());
        generator.generate();
        generator.config_mut().width = 20;
        generator.config_mut().height = 12;
        generator.generate();
        assert_eq!(generator.dungeon().unwrap().width(), 20);
        assert_eq!(generator.dungeon().unwrap().height(), 12);
    }
}
