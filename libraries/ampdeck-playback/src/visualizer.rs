//! Cosmetic bar visualizer
//!
//! Bar heights are synthetic: each tick blends the previous height with a
//! fresh random target (exponential smoothing). Nothing here looks at the
//! audio signal.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Visualizer geometry and animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Number of bars
    pub bar_count: usize,

    /// Redraw timer interval
    pub interval: Duration,

    /// Lowest random target height (pixels)
    pub min_height: u32,

    /// Highest random target height (pixels)
    pub max_height: u32,

    /// Weight of the previous height in the blend (0.0-1.0)
    pub smoothing: f32,
}

impl VisualizerConfig {
    /// Compact green-bar look: 40 bars, 50 ms, 50/50 blend
    pub fn classic() -> Self {
        Self {
            bar_count: 40,
            interval: Duration::from_millis(50),
            min_height: 5,
            max_height: 60,
            smoothing: 0.5,
        }
    }

    /// Taller gradient look: 35 bars, 60 ms, 40/60 blend
    pub fn pro() -> Self {
        Self {
            bar_count: 35,
            interval: Duration::from_millis(60),
            min_height: 10,
            max_height: 110,
            smoothing: 0.4,
        }
    }
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self::pro()
    }
}

/// Animated bar heights
#[derive(Debug, Clone)]
pub struct BarVisualizer {
    config: VisualizerConfig,
    bars: Vec<u32>,
    active: bool,
}

impl BarVisualizer {
    pub fn new(config: VisualizerConfig) -> Self {
        let bars = vec![0; config.bar_count];
        Self {
            config,
            bars,
            active: false,
        }
    }

    /// Start animating on subsequent ticks
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Stop animating and flatten every bar
    pub fn stop(&mut self) {
        self.active = false;
        self.bars.fill(0);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance one animation frame
    ///
    /// Returns true if the bars changed and need a repaint.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.active {
            return false;
        }

        let min = self.config.min_height;
        let max = self.config.max_height.max(min);
        let keep = self.config.smoothing.clamp(0.0, 1.0);

        for bar in &mut self.bars {
            let target = rng.gen_range(min..=max) as f32;
            *bar = (*bar as f32 * keep + target * (1.0 - keep)).round() as u32;
        }
        true
    }

    /// Current bar heights, left to right
    pub fn bars(&self) -> &[u32] {
        &self.bars
    }

    /// Timer interval the UI should tick at
    pub fn interval(&self) -> Duration {
        self.config.interval
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }
}

impl Default for BarVisualizer {
    fn default() -> Self {
        Self::new(VisualizerConfig::default())
    }
}
