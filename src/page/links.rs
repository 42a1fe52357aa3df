//! Outbound destinations and static assets referenced by the drop page.

pub const MARKETPLACE: &str = "https://opensea.io/CatalanDAO";
pub const FAQ_WIKI: &str =
    "https://www.notion.so/Preguntes-freq-ents-NFTs-d-Advent-e5a72e83bd5b49cc97790d9ad0188996";
pub const PARTICIPATION_GUIDE: &str = "https://www.notion.so/catalandao/Com-participar-de-la-subhasta-dels-NFT-d-advent-02422855608b4385b75ba5dca4101afb";
pub const MANIFESTO: &str =
    "https://www.notion.so/catalandao/Manifest-de-la-CatalanDAO-ab6f1e9a0f3342a79cfd18e7e4f7351b";
pub const DISCORD: &str = "https://discord.gg/BNqJQXwtqA";
pub const DISCORD_INVITE: &str = "https://discord.com/invite/BNqJQXwtqA";
pub const POLYGON: &str = "https://polygon.technology/";
pub const RATIONALE_VIDEO: &str = "https://www.youtube.com/embed/UjzkxcHPb9g?start=47";

pub const PHOTO_KLAS: &str = "/public/images/Foto-Klas.png";
pub const PHOTO_CABO_SAN_ROQUE: &str = "/public/images/Foto-CaboSanRoque.png";

pub struct Artist {
    pub key: &'static str,
    pub photo: &'static str,
    pub website: &'static str,
    pub instagram: &'static str,
    pub twitter: Option<&'static str>,
}

pub const ARTISTS: [Artist; 2] = [
    Artist {
        key: "klas",
        photo: PHOTO_KLAS,
        website: "https://klasherbert.com/",
        instagram: "klasherbert",
        twitter: None,
    },
    Artist {
        key: "cabo_san_roque",
        photo: PHOTO_CABO_SAN_ROQUE,
        website: "https://cabosanroque.com/",
        instagram: "cabosanroque",
        twitter: Some("cabosanroque"),
    },
];
