use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    #[default]
    Tennis,
    Pickleball,
    Golf,
    Badminton,
    TableTennis,
    Padel,
    Baseball,
    Basketball,
}

impl Sport {
    pub const ALL: [Sport; 8] = [
        Sport::Tennis,
        Sport::Pickleball,
        Sport::Golf,
        Sport::Badminton,
        Sport::TableTennis,
        Sport::Padel,
        Sport::Baseball,
        Sport::Basketball,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sport::Tennis => "Tennis",
            Sport::Pickleball => "Pickleball",
            Sport::Golf => "Golf",
            Sport::Badminton => "Badminton",
            Sport::TableTennis => "Table Tennis",
            Sport::Padel => "Padel",
            Sport::Baseball => "Baseball",
            Sport::Basketball => "Basketball",
        }
    }

    /// What the athlete is doing in the clip, used to phrase the prompt.
    pub fn motion(&self) -> &'static str {
        match self {
            Sport::Tennis | Sport::Pickleball | Sport::Padel => "stroke or serve",
            Sport::Golf => "swing",
            Sport::Badminton => "stroke or smash",
            Sport::TableTennis => "stroke",
            Sport::Baseball => "swing or pitch",
            Sport::Basketball => "shot",
        }
    }

    /// Kind of venue the maps search should look for.
    pub fn venue(&self) -> &'static str {
        match self {
            Sport::Tennis => "tennis courts or clubs",
            Sport::Pickleball => "pickleball courts",
            Sport::Golf => "golf courses or driving ranges",
            Sport::Badminton => "badminton halls",
            Sport::TableTennis => "table tennis clubs",
            Sport::Padel => "padel courts",
            Sport::Baseball => "batting cages or baseball fields",
            Sport::Basketball => "basketball courts",
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
