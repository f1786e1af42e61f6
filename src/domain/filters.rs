//! Static domain lists consulted after extraction.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

const WEBSITE_BUILDERS: &[&str] = &[
    "zohosites.com",
    "weebly.com",
    "governor.io",
    "sitebuilder.com",
    "blogger.com",
    "jimbo.com",
    "site123.com",
    "doodlekit.com",
    "wordpress.com",
    "wix.com",
    "wix.net",
    "squarespace.com",
    "godaddy.com",
];

const SOCIAL_MEDIA_DOMAINS: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "whatsapp.com",
    "tiktok.com",
    "reddit.com",
    "linkedin.com",
    "linktr.ee",
    "vk.com",
    "discord.com",
    "pinterest.com",
    "ok.ru",
    "zhihu.com",
    "messenger.com",
    "line.me",
    "telegram.org",
    "tumblr.com",
    "namu.wiki",
    "nextdoor.com",
    "ameblo.jp",
    "weibo.com",
    "ppgames.net",
    "redd.it",
    "slack.com",
    "zalo.me",
    "patreon.com",
    "livejournal.com",
    "slideshare.net",
    "snapchat.com",
    "discordapp.com",
    "hatenablog.com",
    "hczog.com",
    "omegle.com",
    "fb.com",
    "pinterest.es",
    "snaptik.app",
    "ssstik.io",
    "gotrackier.com",
    "bakusai.com",
    "pinterest.com.mx",
    "51dongshi.com",
    "ptt.cc",
    "fb.watch",
    "pinterest.co.uk",
    "kwai.com",
    "pinterest.fr",
    "ninisite.com",
    "bp.blogspot.com",
    "dcard.tw",
    "youtubekids.com",
    "ameba.jp",
];

const URL_SHORTENERS: &[&str] = &[
    "bit.ly",
    "bitly.com",
    "tinyurl.com",
    "t.co",
    "goo.gl",
    "ow.ly",
    "buff.ly",
    "is.gd",
    "v.gd",
    "rebrand.ly",
    "cutt.ly",
    "shorturl.at",
    "tiny.cc",
    "rb.gy",
    "bl.ink",
    "lnkd.in",
    "t.ly",
    "s.id",
    "shorte.st",
    "soo.gd",
    "clck.ru",
];

static PUBLIC_DOMAINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    WEBSITE_BUILDERS
        .iter()
        .chain(SOCIAL_MEDIA_DOMAINS)
        .copied()
        .collect()
});

static SHORTENER_DOMAINS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| URL_SHORTENERS.iter().copied().collect());

static KNOWN_DOMAINS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("goo.gle", "google")]));

/// Social networks and website builders: a domain here says nothing about a company.
pub fn is_public_domain(domain: &str) -> bool {
    PUBLIC_DOMAINS.contains(domain) || PUBLIC_DOMAINS.contains(domain.to_ascii_lowercase().as_str())
}

/// Known link shorteners, matched case-insensitively.
pub fn is_url_shortener_domain(domain: &str) -> bool {
    SHORTENER_DOMAINS.contains(domain) || SHORTENER_DOMAINS.contains(domain.to_ascii_lowercase().as_str())
}

/// Static remapping applied as the last step of domain extraction.
pub fn known_domain(domain: &str) -> Option<&'static str> {
    KNOWN_DOMAINS.get(domain).copied()
}
