//! Evaluation mode for running a policy over many episodes
//!
//! Plays episodes in a [`SnakeEnvironment`], records scores in
//! [`GameMetrics`] and reports the high score and average at the end.
//! Ticks can be paced for watching, and a shared stop flag lets the caller
//! end the run between two steps.
//!
//! # Example
//!
//! ```rust,no_run
//! use rl_snake::game::GameConfig;
//! use rl_snake::modes::{EvaluateConfig, EvaluateMode};
//! use rl_snake::rl::GreedyPolicy;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = EvaluateConfig::new(100, GameConfig::default());
//! let mut mode = EvaluateMode::new(config, GreedyPolicy)?;
//! let metrics = mode.run().await?;
//! println!("{}", metrics.format_summary());
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::game::GameConfig;
use crate::metrics::GameMetrics;
use crate::rl::{Environment, Policy, SnakeEnvironment};

/// Configuration for evaluation mode
#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    /// Number of episodes to play
    pub num_episodes: usize,

    /// Cut an episode short after this many steps
    pub max_steps: Option<u32>,

    /// Delay between ticks; `None` runs as fast as possible
    pub tick_interval: Option<Duration>,

    /// Game configuration (grid size, start, seed)
    pub game_config: GameConfig,
}

impl EvaluateConfig {
    pub fn new(num_episodes: usize, game_config: GameConfig) -> Self {
        Self {
            num_episodes,
            max_steps: None,
            tick_interval: None,
            game_config,
        }
    }
}

/// Outcome of one evaluated episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummary {
    pub score: u32,
    pub steps: u32,
    pub total_reward: f64,
    /// Ended by the step limit rather than by the game
    pub truncated: bool,
}

/// Runs a policy against the environment and keeps score
pub struct EvaluateMode<P: Policy> {
    env: SnakeEnvironment,
    policy: P,
    metrics: GameMetrics,
    config: EvaluateConfig,
    stop: Arc<AtomicBool>,
}

impl<P: Policy> EvaluateMode<P> {
    pub fn new(config: EvaluateConfig, policy: P) -> Result<Self> {
        let env = SnakeEnvironment::new(config.game_config.clone())
            .context("Failed to create snake environment")?;

        Ok(Self {
            env,
            policy,
            metrics: GameMetrics::new(),
            config,
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Flag that ends the run before the next step once set
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    /// Play all configured episodes, or until stopped
    pub async fn run(&mut self) -> Result<GameMetrics> {
        info!(
            episodes = self.config.num_episodes,
            grid_size = self.config.game_config.grid_size,
            "starting evaluation"
        );

        // Elapsed time covers the whole run, not a single episode
        self.metrics.on_game_start();

        let mut ticker = self.config.tick_interval.map(|period| {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });

        for episode in 0..self.config.num_episodes {
            if self.is_stopped() {
                info!(episode, "evaluation stopped");
                break;
            }

            let summary = self.run_episode(ticker.as_mut()).await?;
            info!(
                episode,
                score = summary.score,
                steps = summary.steps,
                reward = summary.total_reward,
                truncated = summary.truncated,
                "episode finished"
            );
        }

        self.metrics.update();
        info!(
            games = self.metrics.games_played,
            high_score = self.metrics.high_score,
            average_score = self.metrics.average_score(),
            elapsed = %self.metrics.format_time(),
            "evaluation finished"
        );

        Ok(self.metrics.clone())
    }

    /// Play a single episode from a fresh reset
    pub async fn run_episode(&mut self, mut ticker: Option<&mut Interval>) -> Result<EpisodeSummary> {
        let mut observation = self.env.reset();

        let mut total_reward = 0.0;
        let mut truncated = false;

        while !self.env.is_done() {
            if self.is_stopped() {
                break;
            }
            if let Some(limit) = self.config.max_steps {
                if self.env.state().steps >= limit {
                    debug!(limit, "episode reached the step limit");
                    truncated = true;
                    break;
                }
            }
            if let Some(ticker) = ticker.as_deref_mut() {
                ticker.tick().await;
            }

            let action = self.policy.select_action(&observation);
            let result = self
                .env
                .step(action.index())
                .context("Policy produced an invalid action")?;
            total_reward += result.reward;
            observation = result.observation;
        }

        let state = self.env.state();
        let summary = EpisodeSummary {
            score: state.score,
            steps: state.steps,
            total_reward,
            truncated,
        };
        self.metrics.on_game_over(summary.score, summary.steps);

        Ok(summary)
    }

    fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}
