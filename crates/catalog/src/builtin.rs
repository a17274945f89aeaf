//! Built-in catalog definitions.

/// Static definition of a cache entry.
#[derive(Debug, Clone, Copy)]
pub struct CacheDef {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
    pub default_enabled: bool,
}

/// Static definition of a DLC entry.
#[derive(Debug, Clone, Copy)]
pub struct DlcDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Theme package file name; empty when the pack has no theme.
    pub asset: &'static str,
    pub default_enabled: bool,
}

/// Regenerable game data, in cleanup order.
pub const CACHES: &[CacheDef] = &[
    cache("CASPartCache", &["CASPartCache.package"], true),
    cache("compositorCache", &["compositorCache.package"], true),
    cache("scriptCache", &["scriptCache.package"], true),
    cache("simCompositorCache", &["simCompositorCache.package"], true),
    cache("socialCache", &["socialCache.package"], true),
    cache("WorldCaches", &["WorldCaches/*.package"], true),
    cache("DCCache", &["DCCache/*"], false),
    cache("IGACache", &["IGACache/*"], false),
    cache("SigsCache", &["SigsCache/*.bin"], false),
    cache("ScriptErrorLogs", &["ScriptError_*.xml"], false),
    cache("Sims3Logs", &["Sims3Logs.xml"], true),
    cache("FeaturedItems", &["FeaturedItems/*.png"], false),
    cache("ExportDB", &["Saves/*.sims3/*ExportDB.package"], false),
];

/// Base game and expansion packs.
pub const EXPANSION_PACKS: &[DlcDef] = &[
    dlc("Game", "Base Game", "base.package"),
    dlc("EP1", "World Adventures", "ep1.package"),
    dlc("EP2", "Ambitions", "ep2.package"),
    dlc("EP3", "Late Night", "ep3.package"),
    dlc("EP4", "Generations", "ep4.package"),
    dlc("EP5", "Pets", "ep5.package"),
    dlc("EP6", "Showtime", "ep6.package"),
    dlc("EP7", "Supernatural", "ep7.package"),
    dlc("EP8", "Seasons", "ep8.package"),
    dlc("EP9", "University Life", "ep9.package"),
    dlc("EP10", "Island Paradise", "ep10.package"),
    // Ships its own title screen, so selecting it clears the installed theme.
    dlc("EP11", "Into the Future", ""),
];

/// Stuff packs.
pub const STUFF_PACKS: &[DlcDef] = &[
    dlc("SP1", "High-End Loft Stuff", "sp1.package"),
    dlc("SP2", "Fast Lane Stuff", "sp2.package"),
    dlc("SP3", "Outdoor Living Stuff", "sp3.package"),
    dlc("SP4", "Town Life Stuff", "sp4.package"),
    dlc("SP5", "Master Suite Stuff", "sp5.package"),
    dlc("SP6", "Katy Perry's Sweet Treats", "sp6.package"),
    dlc("SP7", "Diesel Stuff", "sp7.package"),
    dlc("SP8", "70s, 80s, & 90s Stuff", "sp8.package"),
    dlc("SP9", "Movie Stuff", "sp9.package"),
];

const fn cache(
    name: &'static str,
    patterns: &'static [&'static str],
    default_enabled: bool,
) -> CacheDef {
    CacheDef {
        name,
        patterns,
        default_enabled,
    }
}

const fn dlc(id: &'static str, name: &'static str, asset: &'static str) -> DlcDef {
    DlcDef {
        id,
        name,
        asset,
        default_enabled: true,
    }
}
