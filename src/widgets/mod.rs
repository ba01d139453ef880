pub mod form {
    pub use crate::components::{
        Button, FieldKind, FieldShape, HintText, StatusTone, StrengthScore, TextField,
    };
}

pub mod strength {
    pub use crate::components::{
        LoadStatus, PasswordScorer, ScorerCache, ScorerError, ScorerHandle, StrengthScore,
    };
}

pub use form::*;
