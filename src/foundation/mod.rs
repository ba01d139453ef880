pub mod contracts {
    pub use crate::contracts::*;
}

pub mod id {
    pub use crate::id::*;
}

pub mod motion {
    pub use crate::motion::*;
}

pub mod provider {
    pub use crate::provider::*;
}

pub mod style {
    pub use crate::style::*;
}

pub mod theme {
    pub use crate::theme::*;
}

pub mod tokens {
    pub use crate::tokens::*;
}
