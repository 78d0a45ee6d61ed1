use super::assets::SceneAssets;
use super::glyphs::draw_label;
use super::viewport::{PixelRect, Viewport};
use crate::domains::field::{Extent, GraphModel, NodeId, Position2D, TapState};
use crate::domains::logger::DomainLogger;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::debug;

const ICON_SIZE: f64 = 1.0;
const LABEL_HEIGHT: f64 = 0.3;
const LABEL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// The single drawing surface of a session.
///
/// Everything static (background, rocks, taps, labels) is composed once into
/// `backdrop`. Rendering restores the backdrop into `surface` and stamps the
/// agent sprite at its current extent, so every frame reuses the same buffer.
#[derive(Debug, Clone)]
pub struct Canvas {
    viewport: Viewport,
    backdrop: RgbaImage,
    surface: RgbaImage,
    agent_icon: RgbaImage,
    agent_sprite: RgbaImage,
    agent_rect: PixelRect,
    agent_extent: Extent,
}

impl Canvas {
    pub fn compose(
        graph: &GraphModel,
        taps: &TapState,
        assets: SceneAssets,
        viewport: Viewport,
        initial_agent: Extent,
        logger: &dyn DomainLogger,
    ) -> Self {
        let layout = graph.preset().layout();
        let mut backdrop = imageops::resize(
            &assets.background,
            viewport.width(),
            viewport.height(),
            FilterType::Triangle,
        );

        if let Some(rock) = &assets.obstacle {
            for node in graph.obstacles() {
                if let Ok(position) = graph.coordinate(*node) {
                    let extent = Extent::centered(position, ICON_SIZE);
                    stamp(&mut backdrop, rock, viewport.rect(&extent));
                }
            }
        }

        let unknown = taps.unknown_open(&graph.nodes());
        if !unknown.is_empty() {
            logger.warn(&format!("Open taps {:?} are not on the field and will not be drawn", unknown));
        }

        let label_scale = (LABEL_HEIGHT * f64::from(viewport.pixels_per_unit()) / 5.0)
            .round()
            .max(1.0) as u32;
        let draw_tap = |backdrop: &mut RgbaImage, node: NodeId, icon: &RgbaImage, top: f64| {
            let Ok(position) = graph.coordinate(node) else { return };
            let extent = Extent {
                top: position.y + top,
                ..Extent::centered(position, ICON_SIZE)
            };
            stamp(backdrop, icon, viewport.rect(&extent));
            if layout.labels {
                draw_label(backdrop, &node.to_string(), viewport.to_pixel(position), label_scale, LABEL_COLOR);
            }
        };

        for node in taps.open() {
            draw_tap(&mut backdrop, *node, &assets.running_tap, layout.running_tap_top);
        }
        for node in taps.closed() {
            draw_tap(&mut backdrop, *node, &assets.closed_tap, 0.5 * ICON_SIZE);
        }

        let agent_rect = viewport.rect(&initial_agent);
        let agent_sprite = fit(&assets.agent, agent_rect);
        debug!(
            width = backdrop.width(),
            height = backdrop.height(),
            preset = %graph.preset(),
            "composed scene backdrop"
        );

        Self {
            viewport,
            surface: backdrop.clone(),
            backdrop,
            agent_icon: assets.agent,
            agent_sprite,
            agent_rect,
            agent_extent: initial_agent,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.surface.dimensions()
    }

    pub fn agent_extent(&self) -> Extent {
        self.agent_extent
    }

    /// Move the agent sprite. Takes effect on the next [`Canvas::render`].
    pub fn place_agent(&mut self, extent: Extent) {
        let rect = self.viewport.rect(&extent);
        if (rect.width, rect.height) != self.agent_sprite.dimensions() {
            self.agent_sprite = fit(&self.agent_icon, rect);
        }
        self.agent_rect = rect;
        self.agent_extent = extent;
    }

    /// Redraw the surface for the current agent placement.
    pub fn render(&mut self) -> &RgbaImage {
        self.surface.copy_from_slice(self.backdrop.as_raw());
        imageops::overlay(&mut self.surface, &self.agent_sprite, self.agent_rect.x, self.agent_rect.y);
        &self.surface
    }

    /// Pixel at the centre of a field position, for probing rendered output.
    pub fn pixel_at(&self, position: Position2D) -> Option<Rgba<u8>> {
        let (x, y) = self.viewport.to_pixel(position);
        if x < 0 || y < 0 {
            return None;
        }
        self.surface.get_pixel_checked(x as u32, y as u32).copied()
    }
}

fn fit(icon: &RgbaImage, rect: PixelRect) -> RgbaImage {
    imageops::resize(icon, rect.width, rect.height, FilterType::Triangle)
}

fn stamp(target: &mut RgbaImage, icon: &RgbaImage, rect: PixelRect) {
    let sprite = fit(icon, rect);
    imageops::overlay(target, &sprite, rect.x, rect.y);
}
