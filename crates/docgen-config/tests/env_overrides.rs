use docgen_config::DocgenConfig;
use figment::Jail;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("DOCGEN_OUTPUT__PACKAGE", "templates");
        jail.set_env("DOCGEN_TAGS__MAPPING", "discriminator");

        let config = DocgenConfig::load().expect("config loads");
        assert_eq!(config.output.package, "templates");
        assert_eq!(config.tags.mapping, "discriminator");
        Ok(())
    });
}

#[test]
fn env_vars_beat_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".docgen")?;
        jail.create_file(".docgen/config.toml", "[output]\npackage = \"from_file\"\n")?;
        jail.set_env("DOCGEN_OUTPUT__PACKAGE", "from_env");

        let config = DocgenConfig::load().expect("config loads");
        assert_eq!(config.output.package, "from_env");
        Ok(())
    });
}

#[test]
fn env_var_for_bool_section() {
    Jail::expect_with(|jail| {
        jail.set_env("DOCGEN_LOADER__SKIP_VENDOR", "true");

        let config = DocgenConfig::load().expect("config loads");
        assert!(config.loader.skip_vendor);
        Ok(())
    });
}
