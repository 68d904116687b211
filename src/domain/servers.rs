//! Live servers and the short codes the client uses in export file names.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Server {
    pub name: &'static str,
    pub code: &'static str,
}

pub const SERVERS: &[Server] = &[
    Server { name: "Agnarr", code: "agnarr" },
    Server { name: "Antonius Bayle - Kane Bayle", code: "antonius" },
    Server { name: "Aradune", code: "aradune" },
    Server { name: "Bertoxxulous - Sarym", code: "bertox" },
    Server { name: "Bristlebane - The Tribunal", code: "bristle" },
    Server { name: "Cazic-Thule - Fennin Ro", code: "cazic" },
    Server { name: "Drinal - Maelin Starpyre", code: "drinal" },
    Server { name: "Erollisi Marr - The Nameless", code: "erollisi" },
    Server { name: "Firiona Vie", code: "firiona" },
    Server { name: "Luclin - Stromm", code: "luclin" },
    Server { name: "Mangler", code: "mangler" },
    Server { name: "Mischief", code: "mischief" },
    Server { name: "Oakwynd", code: "oakwynd" },
    Server { name: "Povar - Quellious", code: "povar" },
    Server { name: "Ragefire", code: "ragefire" },
    Server { name: "Rizlona", code: "rizlona" },
    Server { name: "Teek", code: "teek" },
    Server { name: "The Rathe - Prexus", code: "rathe" },
    Server { name: "Tormax", code: "tormax" },
    Server { name: "Tunare - The Seventh Hammer", code: "tunare" },
    Server { name: "Vaniki", code: "vaniki" },
    Server { name: "Vox", code: "vox" },
    Server { name: "Xegony - Druzzil Ro", code: "xegony" },
    Server { name: "Yelinak", code: "yelinak" },
    Server { name: "Zek", code: "zek" },
];

impl Server {
    /// Looks a server up by its full display name.
    pub fn find(name: &str) -> Option<&'static Server> {
        SERVERS.iter().find(|server| server.name == name)
    }
}

pub fn server_names() -> impl Iterator<Item = &'static str> {
    SERVERS.iter().map(|server| server.name)
}
