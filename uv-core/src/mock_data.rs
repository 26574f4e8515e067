//! Snapshot of the ARPANSA station feed (17 March 2025), served when the
//! backend API cannot be reached.

use crate::model::UvReading;

const SNAPSHOT_DATE: &str = "17/03/2025";
const SNAPSHOT_FULLDATE: &str = "Monday, 17 March 2025";

#[derive(Debug, Clone, Copy)]
pub struct MockStation {
    pub city: &'static str,
    pub short_name: &'static str,
    pub state: &'static str,
    pub uv_index: f64,
    pub time: &'static str,
    pub utcdatetime: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub static MOCK_STATIONS: [MockStation; 17] = [
    MockStation {
        city: "Adelaide",
        short_name: "adl",
        state: "SA",
        uv_index: 0.5,
        time: "5:11 PM",
        utcdatetime: "2025/03/17 07:41",
        latitude: -34.9285,
        longitude: 138.6007,
    },
    MockStation {
        city: "Alice Springs",
        short_name: "ali",
        state: "NT",
        uv_index: 0.9,
        time: "5:12 PM",
        utcdatetime: "2025/03/17 07:42",
        latitude: -23.6980,
        longitude: 133.8807,
    },
    MockStation {
        city: "Brisbane",
        short_name: "bri",
        state: "QLD",
        uv_index: 0.0,
        time: "5:42 PM",
        utcdatetime: "2025/03/17 07:42",
        latitude: -27.4698,
        longitude: 153.0251,
    },
    MockStation {
        city: "Canberra",
        short_name: "can",
        state: "ACT",
        uv_index: 0.1,
        time: "5:42 PM",
        utcdatetime: "2025/03/17 07:42",
        latitude: -35.2809,
        longitude: 149.1300,
    },
    MockStation {
        city: "Casey",
        short_name: "cas",
        state: "Antarctic",
        uv_index: 1.3,
        time: "3:42 PM",
        utcdatetime: "2025/03/17 07:42",
        latitude: -66.2821,
        longitude: 110.5284,
    },
    MockStation {
        city: "Darwin",
        short_name: "dar",
        state: "NT",
        uv_index: 0.8,
        time: "5:12 PM",
        utcdatetime: "2025/03/17 07:42",
        latitude: -12.4634,
        longitude: 130.8456,
    },
    MockStation {
        city: "Davis",
        short_name: "dav",
        state: "Antarctic",
        uv_index: 2.0,
        time: "2:42 PM",
        utcdatetime: "2025/03/17 07:42",
        latitude: -68.5764,
        longitude: 77.9689,
    },
    MockStation {
        city: "Emerald",
        short_name: "emd",
        state: "QLD",
        uv_index: 0.1,
        time: "5:41 PM",
        utcdatetime: "2025/03/17 07:41",
        latitude: -23.5275,
        longitude: 148.1549,
    },
    MockStation {
        city: "Gold Coast",
        short_name: "gco",
        state: "QLD",
        uv_index: 0.1,
        time: "5:41 PM",
        utcdatetime: "2025/03/17 07:41",
        latitude: -28.0167,
        longitude: 153.4000,
    },
    MockStation {
        city: "Kingston",
        short_name: "kin",
        state: "Norfolk Island",
        uv_index: 0.1,
        time: "5:41 PM",
        utcdatetime: "2025/03/17 07:41",
        latitude: -29.0544,
        longitude: 167.9578,
    },
    MockStation {
        city: "Macquarie Island",
        short_name: "mcq",
        state: "TAS",
        uv_index: 0.0,
        time: "5:41 PM",
        utcdatetime: "2025/03/17 07:41",
        latitude: -54.6167,
        longitude: 158.8500,
    },
    MockStation {
        city: "Mawson",
        short_name: "maw",
        state: "Antarctic",
        uv_index: 1.8,
        time: "12:41 PM",
        utcdatetime: "2025/03/17 07:41",
        latitude: -67.6000,
        longitude: 62.8833,
    },
    MockStation {
        city: "Melbourne",
        short_name: "mel",
        state: "VIC",
        uv_index: 0.3,
        time: "5:41 PM",
        utcdatetime: "2025/03/17 07:41",
        latitude: -37.8136,
        longitude: 144.9631,
    },
    MockStation {
        city: "Newcastle",
        short_name: "new",
        state: "NSW",
        uv_index: 0.1,
        time: "5:41 PM",
        utcdatetime: "2025/03/17 07:41",
        latitude: -32.9283,
        longitude: 151.7817,
    },
    MockStation {
        city: "Perth",
        short_name: "per",
        state: "WA",
        uv_index: 2.7,
        time: "3:41 PM",
        utcdatetime: "2025/03/17 07:41",
        latitude: -31.9505,
        longitude: 115.8605,
    },
    MockStation {
        city: "Sydney",
        short_name: "syd",
        state: "NSW",
        uv_index: 0.1,
        time: "5:41 PM",
        utcdatetime: "2025/03/17 07:41",
        latitude: -33.8688,
        longitude: 151.2093,
    },
    MockStation {
        city: "Townsville",
        short_name: "tow",
        state: "QLD",
        uv_index: 0.1,
        time: "5:41 PM",
        utcdatetime: "2025/03/17 07:41",
        latitude: -19.2590,
        longitude: 146.8169,
    },
];

impl MockStation {
    pub fn to_reading(&self) -> UvReading {
        UvReading {
            city: self.city.to_string(),
            city_id: self.city.to_string(),
            short_name: self.short_name.to_string(),
            state: self.state.to_string(),
            uv_index: self.uv_index,
            time: self.time.to_string(),
            date: SNAPSHOT_DATE.to_string(),
            fulldate: SNAPSHOT_FULLDATE.to_string(),
            utcdatetime: self.utcdatetime.to_string(),
            status: "ok".to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
            distance: None,
        }
    }
}

pub fn find_station(city: &str) -> Option<&'static MockStation> {
    MOCK_STATIONS.iter().find(|s| s.city.eq_ignore_ascii_case(city))
}
