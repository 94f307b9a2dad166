use gitfleet::core::discovery::{partition_already_cloned, repo_name_from_url};
use gitfleet::utils::validate_repo_name;
use std::fs;
use tempfile::TempDir;

/// URLs whose derived directory name would escape the fleet root.
#[test]
fn test_malicious_repository_urls() {
    let malicious_urls = [
        "https://github.com/user/..",
        "https://github.com/user/../",
        "git@github.com:..",
        "https://github.com/user/.git",
        "https://github.com/user/repo\\..\\evil",
        "https://github.com/user/evil\0name.git",
        "https://github.com/user/evil\nname.git",
        "",
        "/",
    ];

    for url in &malicious_urls {
        let result = repo_name_from_url(url);
        assert!(result.is_err(), "Should reject malicious URL: {url:?}");
    }
}

#[test]
fn test_malicious_repo_names() {
    let malicious_names = [
        "",
        ".",
        "..",
        "../etc",
        "repo/../../etc",
        "sub/dir",
        "c:repo",
        "repo\\evil",
        "repo\0",
        "repo\x1b[31m",
    ];

    for name in &malicious_names {
        assert!(
            validate_repo_name(name).is_err(),
            "Should reject malicious repo name: {name:?}"
        );
    }
}

#[test]
fn test_legitimate_inputs_still_work() {
    let cases = [
        ("https://github.com/acme/api.git", "api"),
        ("https://github.com/acme/web", "web"),
        ("https://github.com/acme/web/", "web"),
        ("git@github.com:acme/tools.git", "tools"),
        ("acme:dotfiles", "dotfiles"),
        ("file:///srv/git/my.project.git", "my.project"),
        ("ssh://git@host:2222/team/repo-name.git", "repo-name"),
        ("https://github.com/acme/v1..2.git", "v1..2"),
    ];

    for (url, expected) in cases {
        assert_eq!(repo_name_from_url(url).unwrap(), expected, "for {url}");
    }
}

#[test]
fn test_large_input_handling() {
    let long_name = "a".repeat(10_000);
    let url = format!("https://github.com/user/{long_name}.git");
    assert_eq!(repo_name_from_url(&url).unwrap(), long_name);
}

/// A rejected URL is never treated as already cloned, so the clone itself
/// gets to report it.
#[test]
fn test_partition_keeps_unnameable_urls() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("api")).unwrap();
    fs::create_dir(root.path().join("v1..2")).unwrap();

    let urls = vec![
        "https://github.com/acme/api.git".to_string(),
        "https://github.com/acme/v1..2.git".to_string(),
        "https://github.com/acme/..".to_string(),
        "https://github.com/acme/web.git".to_string(),
    ];
    let (to_clone, existing) = partition_already_cloned(root.path(), &urls);

    assert_eq!(
        existing,
        vec![
            "https://github.com/acme/api.git".to_string(),
            "https://github.com/acme/v1..2.git".to_string(),
        ]
    );
    assert_eq!(
        to_clone,
        vec![
            "https://github.com/acme/..".to_string(),
            "https://github.com/acme/web.git".to_string(),
        ]
    );
}
