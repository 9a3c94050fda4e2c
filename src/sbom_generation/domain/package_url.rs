use super::Dependency;

/// Builds the package URL for a dependency: `pkg:<manager>/<name>@<version>`.
///
/// Each `/`-separated segment of the name is percent-encoded on its own so
/// tap-qualified names (`homebrew/cask/firefox`) keep their namespace
/// separators. The version segment is dropped when the version is unknown.
pub fn package_url(dependency: &Dependency) -> String {
    let name = dependency
        .name()
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    let mut purl = format!("pkg:{}/{}", dependency.manager().to_lowercase(), name);
    if let Some(version) = dependency.version() {
        purl.push('@');
        purl.push_str(&urlencoding::encode(version));
    }
    purl
}
