pub mod bar;
pub mod channel;
pub mod report;

pub use bar::{Bar, BarInterval};
pub use channel::{ChannelReading, ChannelResult, ChannelType, StrategyError};
pub use report::{
    ChannelReport, Horizon, OverallBias, OverallConclusion, TimeframeAnalysis, TimeframeFailure,
    TimeframeReport, TimeframeVerdict, VerdictKind,
};
