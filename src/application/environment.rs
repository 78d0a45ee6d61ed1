use crate::adapters::outbound::{FilesystemAssetSource, GifArtifactEncoder, TerminalPresenter};
use crate::common::DomainResult;
use crate::config::Config;
use crate::domains::animation::{
    AnimationController, AnimationEvent, AnimationEventPublisher, ArtifactEncoder, FramePresenter, FrameRecorder,
    Playback, PresentedFrame, Step,
};
use crate::domains::field::{GraphModel, NodeId, TapState};
use crate::domains::logger::DynLogger;
use crate::domains::report::{Reporter, SearchStats};
use crate::domains::scene::{AssetSource, Canvas, SceneAssets, Viewport};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

/// Where the agent stands before the first step.
pub const START_NODE: NodeId = 1;
pub const LOADING_VISUALS: &str = "Loading Visuals...";
pub const SAVING_FILE: &str = "Saving file...";

/// One simulation session: a fixed field, fixed taps, one drawing surface.
pub struct Environment {
    session_id: Uuid,
    graph: Arc<GraphModel>,
    taps: TapState,
    controller: AnimationController,
    canvas: Canvas,
    encoder: Box<dyn ArtifactEncoder>,
    presenter: Box<dyn FramePresenter>,
    events: AnimationEventPublisher,
    logger: DynLogger,
    step_interval: Duration,
}

impl Environment {
    /// Build a session. Fails if any required image cannot be loaded.
    ///
    /// `open_taps` of `None` opens the default tap. Invalid requests are
    /// handled by the preset's validation policy and never fail construction.
    pub fn new(
        config: &Config,
        open_taps: Option<BTreeSet<NodeId>>,
        assets: &dyn AssetSource,
        logger: DynLogger,
    ) -> DomainResult<Self> {
        let preset = config.session.preset;
        let graph = Arc::new(GraphModel::new(preset));
        for (node, neighbor) in graph.dangling_neighbors() {
            logger.warn(&format!("Node {} lists neighbor {} which is not on the field", node, neighbor));
        }

        let scene_assets = SceneAssets::load(assets, preset)?;
        let taps = TapState::classify(
            open_taps.as_ref(),
            &graph.nodes(),
            preset.layout().validation,
            logger.as_ref(),
        );

        let controller = AnimationController::new(graph.clone(), config.animation.scale_factor);
        let viewport = Viewport::new(graph.view(), config.render.pixels_per_unit);
        let canvas = Canvas::compose(
            &graph,
            &taps,
            scene_assets,
            viewport,
            controller.scaled_extent(START_NODE)?,
            logger.as_ref(),
        );

        let session_id = Uuid::new_v4();
        info!(%session_id, %preset, open_taps = ?taps.open(), "environment ready");

        Ok(Self {
            session_id,
            presenter: Box::new(TerminalPresenter::new(std::io::stdout(), &graph, &taps)),
            encoder: Box::new(GifArtifactEncoder::new(&config.output, &config.animation, &config.render)),
            events: AnimationEventPublisher::new(session_id.to_string(), None),
            graph,
            taps,
            controller,
            canvas,
            logger,
            step_interval: Duration::from_millis(config.animation.step_interval_ms.max(1)),
        })
    }

    /// Build a session from configuration, loading images from disk.
    pub fn from_config(config: &Config, logger: DynLogger) -> DomainResult<Self> {
        let open_taps = config
            .session
            .open_taps
            .as_ref()
            .map(|taps| taps.iter().copied().collect());
        let assets = FilesystemAssetSource::new(config.assets.clone());
        Self::new(config, open_taps, &assets, logger)
    }

    pub fn with_presenter(mut self, presenter: Box<dyn FramePresenter>) -> Self {
        self.presenter = presenter;
        self
    }

    pub fn with_encoder(mut self, encoder: Box<dyn ArtifactEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn with_event_sender(mut self, sender: mpsc::UnboundedSender<AnimationEvent>) -> Self {
        self.events.attach(sender);
        self
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn taps(&self) -> &TapState {
        &self.taps
    }

    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Print the search summary, then play `movements` back one step per tick.
    ///
    /// Playback does not loop; it returns after the last step has been shown.
    pub async fn display_animation(&mut self, stats: &SearchStats, movements: &[NodeId]) -> DomainResult<()> {
        Reporter::new(self.logger.as_ref()).emit(stats);
        self.logger.info(LOADING_VISUALS);
        self.controller.validate(movements)?;
        self.events.playback_started(self.graph.preset(), movements.len());

        let mut ticker = interval(self.step_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut steps = 0;
        let mut playback = Playback::new(movements.len());
        while let Some(index) = playback.advance() {
            ticker.tick().await;
            if let Step::Move(extent) = self.controller.step(index, movements)? {
                self.canvas.place_agent(extent);
            }
            let node = movements[index];
            let extent = self.canvas.agent_extent();
            let frame = PresentedFrame {
                index,
                total: movements.len(),
                node,
                extent,
                surface: self.canvas.render(),
            };
            self.presenter.present(&frame).await?;
            self.events.step_advanced(index, node, extent);
            debug!(index, node, "step advanced");
            steps += 1;
        }

        self.presenter.finish().await?;
        self.events.playback_finished(steps);
        Ok(())
    }

    /// Capture every step and write one GIF. Returns `None` without touching
    /// the filesystem when `movements` is empty.
    pub fn save_animation(&mut self, movements: &[NodeId], prefix: &str) -> DomainResult<Option<PathBuf>> {
        self.controller.validate(movements)?;
        if !movements.is_empty() {
            self.logger.info(SAVING_FILE);
        }

        let recorder = FrameRecorder::new(&self.controller, self.logger.as_ref(), &self.events);
        let snapshots = recorder.record(&mut self.canvas, movements)?;
        if snapshots.is_empty() {
            return Ok(None);
        }

        let path = self.encoder.encode(&snapshots, prefix)?;
        self.logger.info(&format!("File saved as {}", path.display()));
        self.events.artifact_written(&path, snapshots.len());
        Ok(Some(path))
    }
}
