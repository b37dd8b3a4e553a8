use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TickerError {
    #[error("curried function of arity {arity} over-applied with {supplied} arguments")]
    Overapplied { arity: usize, supplied: usize },

    #[error("stock record has no id")]
    MissingStockId,

    #[error("ticker board lock poisoned")]
    BoardPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = TickerError::Overapplied {
            arity: 2,
            supplied: 3,
        };
        assert_eq!(
            err.to_string(),
            "curried function of arity 2 over-applied with 3 arguments"
        );
        assert_eq!(TickerError::MissingStockId.to_string(), "stock record has no id");
    }
}
