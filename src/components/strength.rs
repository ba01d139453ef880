//! Password strength scoring and the meter it drives.
//!
//! Scoring is delegated to an external scorer that is loaded lazily and kept
//! in a process-wide [`ScorerCache`]. Until the scorer resolves, and forever if
//! it fails to load, every password scores [`StrengthScore::Zero`].

use std::fmt::{Display, Formatter};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};

use futures::future::{self, BoxFuture, FutureExt, Shared};

use crate::theme::{ColorValue, StrengthMeterTokens};
use crate::tokens::FIELD_METRICS;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StrengthScore {
    #[default]
    Zero,
    One,
    Two,
    Three,
    Four,
}

impl StrengthScore {
    pub const MAX: u8 = 4;

    /// Scores above the top band clamp to `Four`.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Zero,
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            _ => Self::Four,
        }
    }

    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    pub fn width_pct(self) -> f32 {
        f32::from(self.as_u8()) * 100.0 / f32::from(Self::MAX)
    }
}

pub fn meter_color(score: StrengthScore, tokens: &StrengthMeterTokens) -> &ColorValue {
    match score {
        StrengthScore::Zero => &tokens.track,
        StrengthScore::One => &tokens.weak,
        StrengthScore::Two => &tokens.fair,
        StrengthScore::Three | StrengthScore::Four => &tokens.strong,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeterGeometry {
    pub width_pct: f32,
    pub height: f32,
}

/// Geometry of the meter fill; a locked (disabled or read-only) field
/// collapses the meter to zero height.
pub fn meter_geometry(score: StrengthScore, locked: bool) -> MeterGeometry {
    MeterGeometry {
        width_pct: score.width_pct(),
        height: if locked { 0.0 } else { FIELD_METRICS.meter_height },
    }
}

pub trait PasswordScorer: Send + Sync {
    fn score(&self, password: &str) -> StrengthScore;
}

pub type ScorerHandle = Arc<dyn PasswordScorer>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScorerError {
    /// No scorer is compiled into this build.
    Unavailable,
    /// The scorer was present but failed its warm-up probe.
    Probe(String),
}

impl Display for ScorerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScorerError::Unavailable => f.write_str("password scorer is not available in this build"),
            ScorerError::Probe(error) => write!(f, "password scorer failed to load: {error}"),
        }
    }
}

impl std::error::Error for ScorerError {}

#[cfg(feature = "strength-meter")]
pub struct ZxcvbnScorer;

#[cfg(feature = "strength-meter")]
impl ZxcvbnScorer {
    const PROBE: &'static str = "calmui-probe";

    /// Forces the scorer's dictionaries to build and checks it answers.
    pub fn load() -> Result<Self, ScorerError> {
        zxcvbn::zxcvbn(Self::PROBE, &[])
            .map(|_| Self)
            .map_err(|error| ScorerError::Probe(format!("{error:?}")))
    }
}

#[cfg(feature = "strength-meter")]
impl PasswordScorer for ZxcvbnScorer {
    fn score(&self, password: &str) -> StrengthScore {
        match zxcvbn::zxcvbn(password, &[]) {
            Ok(entropy) => StrengthScore::from_raw(entropy.score()),
            Err(_) => StrengthScore::Zero,
        }
    }
}

pub type LoadFuture = BoxFuture<'static, Result<ScorerHandle, ScorerError>>;
type SharedLoad = Shared<BoxFuture<'static, Option<ScorerHandle>>>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadStatus {
    Unloaded,
    Loading,
    Ready,
    Failed,
}

enum LoadState {
    Unloaded,
    Loading(SharedLoad),
    Ready(ScorerHandle),
    Failed,
}

/// Load-once cache of the password scorer.
///
/// The first `ensure_loaded` call starts the load; calls made while it is in
/// flight join the same shared future; later calls resolve immediately. A
/// failed load is final.
pub struct ScorerCache {
    state: Mutex<LoadState>,
    loader: Box<dyn Fn() -> LoadFuture + Send + Sync>,
}

static GLOBAL_SCORER: LazyLock<Arc<ScorerCache>> =
    LazyLock::new(|| Arc::new(ScorerCache::new(default_loader)));

fn default_loader() -> LoadFuture {
    #[cfg(feature = "strength-meter")]
    {
        async { ZxcvbnScorer::load().map(|scorer| Arc::new(scorer) as ScorerHandle) }.boxed()
    }
    #[cfg(not(feature = "strength-meter"))]
    {
        future::ready(Err(ScorerError::Unavailable)).boxed()
    }
}

impl ScorerCache {
    pub fn new(loader: impl Fn() -> LoadFuture + Send + Sync + 'static) -> Self {
        Self {
            state: Mutex::new(LoadState::Unloaded),
            loader: Box::new(loader),
        }
    }

    pub fn global() -> Arc<ScorerCache> {
        Arc::clone(&GLOBAL_SCORER)
    }

    fn lock_state(&self) -> MutexGuard<'_, LoadState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn status(&self) -> LoadStatus {
        match &*self.lock_state() {
            LoadState::Unloaded => LoadStatus::Unloaded,
            LoadState::Loading(_) => LoadStatus::Loading,
            LoadState::Ready(_) => LoadStatus::Ready,
            LoadState::Failed => LoadStatus::Failed,
        }
    }

    pub fn scorer(&self) -> Option<ScorerHandle> {
        match &*self.lock_state() {
            LoadState::Ready(scorer) => Some(Arc::clone(scorer)),
            _ => None,
        }
    }

    /// Score of `password`, or `Zero` while no scorer is loaded.
    pub fn score(&self, password: &str) -> StrengthScore {
        self.scorer()
            .map(|scorer| scorer.score(password))
            .unwrap_or_default()
    }

    pub fn ensure_loaded(self: &Arc<Self>) -> BoxFuture<'static, Option<ScorerHandle>> {
        let mut state = self.lock_state();
        match &*state {
            LoadState::Ready(scorer) => return future::ready(Some(Arc::clone(scorer))).boxed(),
            LoadState::Failed => return future::ready(None).boxed(),
            LoadState::Loading(in_flight) => return in_flight.clone().boxed(),
            LoadState::Unloaded => {}
        }

        tracing::debug!("loading password scorer");
        let cache = Arc::clone(self);
        let load = (self.loader)();
        let shared = async move {
            let result = load.await;
            cache.finish(result)
        }
        .boxed()
        .shared();
        *state = LoadState::Loading(shared.clone());
        shared.boxed()
    }

    fn finish(&self, result: Result<ScorerHandle, ScorerError>) -> Option<ScorerHandle> {
        let mut state = self.lock_state();
        match result {
            Ok(scorer) => {
                tracing::debug!("password scorer ready");
                *state = LoadState::Ready(Arc::clone(&scorer));
                Some(scorer)
            }
            Err(error) => {
                tracing::warn!(%error, "password strength meter disabled");
                *state = LoadState::Failed;
                None
            }
        }
    }
}
