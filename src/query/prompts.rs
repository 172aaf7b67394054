// Prompt Catalog
// The assignment questions, indexed the same way as the query table

use super::table::{slot_position, SLOT_COUNT};
use crate::error::Result;

/// One assignment question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub index: usize,
    /// What the query has to find
    pub statement: &'static str,
    /// Required output columns, when the question names them
    pub output: Option<&'static str>,
    /// Required ordering of the result
    pub ordering: &'static str,
}

static PROMPTS: [Prompt; SLOT_COUNT] = [
    Prompt {
        index: 0,
        statement: "List all airport codes and their cities.",
        output: Some("airportid, city"),
        ordering: "city, increasing",
    },
    Prompt {
        index: 1,
        statement: "Find the names of the customers whose names are at least 15 characters \
                    long and whose second letter is \"l\".",
        output: None,
        ordering: "name",
    },
    Prompt {
        index: 2,
        statement: "Find any customers who flew on their birthday. \
                    Hint: the \"extract\" function operates on dates.",
        output: Some("all columns from customers"),
        ordering: "customer name",
    },
    Prompt {
        index: 3,
        statement: "For every source/destination pair with at least 3 flights, list the \
                    cities along with the airport codes and the number of flights.",
        output: Some(
            "source_city, source_airport_code, dest_city, dest_airport_code, number_of_flights",
        ),
        ordering: "number_of_flights decreasing, then source_city, then dest_city",
    },
    Prompt {
        index: 4,
        statement: "Find the airline with the maximum number of customers registered as \
                    frequent fliers.",
        output: Some("airline name"),
        ordering: "name, if several airlines tie",
    },
    Prompt {
        index: 5,
        statement: "For all flights from OAK to IAD, list the flight id, the airline name, \
                    and the duration split into hours and minutes.",
        output: Some("flightid, airline name, hours, minutes"),
        ordering: "flightid",
    },
    Prompt {
        index: 6,
        statement: "Find empty flights (flight, flight date) on any date on which someone \
                    flew. If anyone flew on a date, every flight took off that day, with or \
                    without passengers.",
        output: Some("flight id, flight date"),
        ordering: "flight id increasing, then date increasing",
    },
    Prompt {
        index: 7,
        statement: "List customers who do not list Southwest as their frequent flier \
                    airline but flew Southwest the most, by number of flights.",
        output: Some("customerid, customer_name"),
        ordering: "customerid",
    },
    Prompt {
        index: 8,
        statement: "List customers whose first and last flights are 5 days apart.",
        output: None,
        ordering: "customer name",
    },
    Prompt {
        index: 9,
        statement: "Find customers whose maximum interval between any two consecutive \
                    flights is 4 days.",
        output: Some("customer name"),
        ordering: "customer name",
    },
    Prompt {
        index: 10,
        statement: "Rank airports by the total number of flights departing them. The busiest \
                    airport gets rank 1; tied airports share a rank and the next rank is \
                    skipped.",
        output: Some("AirportID, Airport-rank"),
        ordering: "rank increasing, then airport id",
    },
];

/// Look up the question answered by slot `index`
pub fn prompt(index: i64) -> Result<&'static Prompt> {
    let position = slot_position(index)?;
    Ok(&PROMPTS[position])
}

/// All questions in index order
pub fn prompts() -> &'static [Prompt] {
    &PROMPTS
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}. {}", self.index, self.statement)?;
        if let Some(output) = self.output {
            writeln!(f, "   Output: {output}")?;
        }
        write!(f, "   Order by: {}", self.ordering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryTableError;

    #[test]
    fn test_every_slot_has_a_prompt() {
        for (position, prompt) in prompts().iter().enumerate() {
            assert_eq!(prompt.index, position);
            assert!(!prompt.statement.is_empty());
            assert!(!prompt.ordering.is_empty());
        }
        assert_eq!(prompts().len(), SLOT_COUNT);
    }

    #[test]
    fn test_prompt_lookup_range() {
        assert_eq!(prompt(10).unwrap().output, Some("AirportID, Airport-rank"));
        assert!(matches!(
            prompt(11),
            Err(QueryTableError::OutOfRange { index: 11 })
        ));
        assert!(prompt(-1).is_err());
    }

    #[test]
    fn test_prompt_display() {
        let text = prompt(5).unwrap().to_string();
        assert!(text.starts_with("5. For all flights from OAK to IAD"));
        assert!(text.contains("Output: flightid, airline name, hours, minutes"));
        assert!(text.ends_with("Order by: flightid"));
    }
}
