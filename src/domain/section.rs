use url::Url;

/// One independently paginated listing endpoint, mapped to one output file.
#[derive(Debug, PartialEq, Clone)]
pub struct Section {
    pub url: Url,
    pub output_file_name: String,
}

pub fn build_sections(base: &Url, paths: &[String]) -> Vec<Section> {
    paths
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .filter_map(|path| {
            let url = match base.join(path) {
                Ok(url) => url,
                Err(e) => {
                    log::error!("Skipping unusable section path {:?}: {}", path, e);
                    return None;
                }
            };
            match last_path_segment(&url) {
                Some(segment) => Some(Section {
                    output_file_name: format!("{}.json", segment),
                    url,
                }),
                None => {
                    log::error!("Skipping section path {:?}: no final path segment", path);
                    None
                }
            }
        })
        .collect()
}

fn last_path_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|s| !s.is_empty())
        .next_back()
        .map(|s| s.to_string())
}
