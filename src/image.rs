//! Image reference resolution.
//!
//! Documents never carry image URLs, only asset references of the form
//! `image-<assetId>-<width>x<height>-<format>`. These map onto the image CDN
//! as `https://cdn.sanity.io/images/<project>/<dataset>/<assetId>-<width>x<height>.<format>`.

use crate::models::ImageRef;
use url::Url;

/// Served whenever an image cannot be resolved
pub const PLACEHOLDER_PATH: &str = "/placeholder.svg";

const CDN_BASE: &str = "https://cdn.sanity.io/images/";

/// Rendered size hint for one usage site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const LISTING_BANNER: Dimensions = Dimensions::new(400, 300);
    pub const DETAIL_BANNER: Dimensions = Dimensions::new(800, 600);
    pub const GALLERY_THUMBNAIL: Dimensions = Dimensions::new(400, 300);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Parsed pieces of an asset reference
#[derive(Debug, Clone, PartialEq, Eq)]
struct AssetId<'a> {
    id: &'a str,
    width: u32,
    height: u32,
    format: &'a str,
}

fn is_asset_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn parse_asset_ref(reference: &str) -> Option<AssetId<'_>> {
    let rest = reference.strip_prefix("image-")?;
    let (rest, format) = rest.rsplit_once('-')?;
    let (id, dims) = rest.rsplit_once('-')?;
    let (width, height) = dims.split_once('x')?;

    if id.is_empty() || !id.chars().all(is_asset_id_char) {
        return None;
    }
    if format.is_empty() || !format.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(AssetId {
        id,
        width: width.parse().ok()?,
        height: height.parse().ok()?,
        format,
    })
}

#[derive(Debug, Clone)]
pub struct ImageResolver {
    base: Url,
}

impl ImageResolver {
    pub fn new(project_id: &str, dataset: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(CDN_BASE)?.join(&format!("{}/{}/", project_id, dataset))?;
        Ok(Self { base })
    }

    /// Full CDN URL for an image field, or `None` when the reference is
    /// missing or malformed
    pub fn resolve(&self, image: Option<&ImageRef>) -> Option<Url> {
        let reference = image?.asset_ref.as_deref()?;
        let asset = parse_asset_ref(reference)?;
        let mut url = self.base.clone();
        url.path_segments_mut().ok()?.pop_if_empty().push(&format!(
            "{}-{}x{}.{}",
            asset.id, asset.width, asset.height, asset.format
        ));
        Some(url)
    }

    /// `src` attribute for an image element: the resolved URL sized for the
    /// usage site, or the placeholder
    pub fn src(&self, image: Option<&ImageRef>, size: Dimensions) -> String {
        match self.resolve(image) {
            Some(mut url) => {
                url.query_pairs_mut()
                    .append_pair("w", &size.width.to_string())
                    .append_pair("h", &size.height.to_string())
                    .append_pair("fit", "crop");
                url.to_string()
            }
            None => PLACEHOLDER_PATH.to_string(),
        }
    }
}
