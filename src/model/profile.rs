// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Artist profile data for the profile view. Sample figures only.

#[derive(Debug, Clone, Copy)]
pub(crate) struct ArtistStats {
    pub(crate) total_plays: u64,
    pub(crate) monthly_listeners: u64,
    pub(crate) followers: u64,
    pub(crate) tracks: u64,
}

#[derive(Debug, Clone)]
pub(crate) struct ProfileRelease {
    pub(crate) title: String,
    pub(crate) release_date: String,
    pub(crate) plays: u64,
}

#[derive(Debug, Clone)]
pub(crate) struct TopTrack {
    pub(crate) title: String,
    pub(crate) plays: u64,
    pub(crate) duration_secs: u64,
}

#[derive(Debug, Clone)]
pub(crate) struct ArtistProfile {
    pub(crate) name: String,
    pub(crate) stage_name: String,
    pub(crate) bio: String,
    pub(crate) location: String,
    pub(crate) genres: Vec<String>,
    pub(crate) social_links: Vec<(String, String)>,
    pub(crate) stats: ArtistStats,
    pub(crate) recent_releases: Vec<ProfileRelease>,
    pub(crate) top_tracks: Vec<TopTrack>,
}

impl ArtistProfile {
    pub(crate) fn sample() -> Self {
        Self {
            name: "John Kemeu".into(),
            stage_name: "KEMEUS".into(),
            bio: "Dandora based rapper".into(),
            location: "Nairobi, Kenya".into(),
            genres: vec!["Hip-Hop".into(), "Rap".into(), "Afro-Beat".into()],
            social_links: vec![
                ("Instagram".into(), "https://instagram.com/nova".into()),
                ("Twitter".into(), "https://twitter.com/nova".into()),
                ("Spotify".into(), "https://spotify.com/artist/nova".into()),
            ],
            stats: ArtistStats {
                total_plays: 1_245_000,
                monthly_listeners: 45_000,
                followers: 12_500,
                tracks: 24,
            },
            recent_releases: vec![
                ProfileRelease {
                    title: "Naskia Mnanisaka".into(),
                    release_date: "2024-02-15".into(),
                    plays: 450_000,
                },
                ProfileRelease {
                    title: "Fugitive".into(),
                    release_date: "2024-01-20".into(),
                    plays: 320_000,
                },
            ],
            top_tracks: vec![
                TopTrack {
                    title: "Naskia Mnanisaka".into(),
                    plays: 450_000,
                    duration_secs: 272,
                },
                TopTrack {
                    title: "Fugitive".into(),
                    plays: 320_000,
                    duration_secs: 315,
                },
                TopTrack {
                    title: "Zooted".into(),
                    plays: 280_000,
                    duration_secs: 225,
                },
            ],
        }
    }
}
