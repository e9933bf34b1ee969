//! Arrival predictions and their on-screen formatting.

use std::ops::Deref;

/// Words dropped from destination names to fit the panel.
const NOISE_WORDS: [&str; 2] = ["underground", "station"];

/// Maximum number of words kept from a destination name.
const DESTINATION_WORDS: usize = 2;

/// A single predicted arrival at the configured station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    /// Full destination name as reported by the API.
    pub destination_name: String,
    /// Seconds until the train reaches the platform.
    pub seconds_to_station: u32,
}

impl Arrival {
    pub fn new(destination_name: impl Into<String>, seconds_to_station: u32) -> Self {
        Self {
            destination_name: destination_name.into(),
            seconds_to_station,
        }
    }

    /// Whole minutes until arrival, rounded down.
    pub fn minutes(&self) -> u32 {
        self.seconds_to_station / 60
    }

    /// Destination shortened for the panel.
    ///
    /// ```
    /// use tube_board::domain::Arrival;
    ///
    /// let a = Arrival::new("Ealing Broadway Underground Station", 120);
    /// assert_eq!(a.short_destination(), "Ealing Broadway");
    /// ```
    pub fn short_destination(&self) -> String {
        self.destination_name
            .split_whitespace()
            .filter(|w| !NOISE_WORDS.contains(&w.to_lowercase().as_str()))
            .take(DESTINATION_WORDS)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `"DUE"` inside the first minute, otherwise `"{n}m"`.
    pub fn due_text(&self) -> String {
        match self.minutes() {
            0 => "DUE".to_string(),
            mins => format!("{mins}m"),
        }
    }
}

/// Arrivals ordered soonest first.
///
/// The ordering is established on construction, so any list handed to the
/// cache or the pager is already sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrivalList(Vec<Arrival>);

impl ArrivalList {
    /// Sort `arrivals` by time to station. Equal times keep their input order.
    pub fn new(mut arrivals: Vec<Arrival>) -> Self {
        arrivals.sort_by_key(|a| a.seconds_to_station);
        Self(arrivals)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[Arrival] {
        &self.0
    }
}

impl Deref for ArrivalList {
    type Target = [Arrival];

    fn deref(&self) -> &[Arrival] {
        &self.0
    }
}

impl From<Vec<Arrival>> for ArrivalList {
    fn from(arrivals: Vec<Arrival>) -> Self {
        Self::new(arrivals)
    }
}

impl FromIterator<Arrival> for ArrivalList {
    fn from_iter<I: IntoIterator<Item = Arrival>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_sorted_on_construction() {
        let list = ArrivalList::new(vec![
            Arrival::new("A", 0),
            Arrival::new("B", 65),
            Arrival::new("C", 40),
        ]);

        let names: Vec<_> = list.iter().map(|a| a.destination_name.as_str()).collect();
        assert_eq!(names, ["A", "C", "B"]);
    }

    #[test]
    fn equal_times_keep_api_order() {
        let list: ArrivalList = vec![
            Arrival::new("First", 90),
            Arrival::new("Early", 10),
            Arrival::new("Second", 90),
        ]
        .into();

        let names: Vec<_> = list.iter().map(|a| a.destination_name.as_str()).collect();
        assert_eq!(names, ["Early", "First", "Second"]);
    }

    #[test]
    fn due_text_rounds_down() {
        assert_eq!(Arrival::new("A", 0).due_text(), "DUE");
        assert_eq!(Arrival::new("C", 40).due_text(), "DUE");
        assert_eq!(Arrival::new("C", 59).due_text(), "DUE");
        assert_eq!(Arrival::new("B", 65).due_text(), "1m");
        assert_eq!(Arrival::new("B", 600).due_text(), "10m");
    }

    #[test]
    fn short_destination_drops_noise_words() {
        let a = Arrival::new("Hainault Underground Station", 0);
        assert_eq!(a.short_destination(), "Hainault");

        let a = Arrival::new("Heathrow Terminals 2 & 3 Underground Station", 0);
        assert_eq!(a.short_destination(), "Heathrow Terminals");

        let a = Arrival::new("West Ruislip STATION", 0);
        assert_eq!(a.short_destination(), "West Ruislip");
    }

    #[test]
    fn short_destination_of_noise_only_is_empty() {
        let a = Arrival::new("Underground Station", 0);
        assert_eq!(a.short_destination(), "");
    }
}
