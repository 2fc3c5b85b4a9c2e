// Game core: challenge tokens, pool selection, rounds and daily streaks.
// Nothing in here touches the network or the clock except `GameSession::create`.

pub mod daily;
pub mod round;
pub mod selection;
pub mod session;
pub mod tiers;

pub use daily::{daily_pool, DailyStats, StreakBook};
pub use round::{Accuracy, AnswerOutcome, GuessResult, Phase, RoundError, RoundState, RoundSummary};
pub use selection::{select_pool, RecentItems};
pub use session::{GameSession, InvalidSession};
pub use tiers::{Tier, TierOutcome, TierQueue};
