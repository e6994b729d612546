//! Integration tests for wasm-ports

mod sdl_config_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn sdl_config() -> Command {
        cargo_bin_cmd!("sdl-config")
    }

    #[test]
    fn cflags_prints_empty_line() {
        sdl_config()
            .arg("--cflags")
            .assert()
            .success()
            .stdout("\n")
            .stderr(predicate::str::contains(
                "emscripten sdl-config called with",
            ))
            .stderr(predicate::str::contains("--cflags"));
    }

    #[test]
    fn version_anywhere() {
        sdl_config()
            .args(["--prefix=/usr", "--version"])
            .assert()
            .success()
            .stdout("1.3.0\n");
    }

    #[test]
    fn unknown_flags_are_silent() {
        sdl_config()
            .arg("--libs")
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("--libs"));
    }

    #[test]
    fn no_args_succeeds() {
        sdl_config().assert().success().stdout("");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_still_answers_version() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        sdl_config()
            .arg(OsString::from_vec(b"--p\xff".to_vec()))
            .arg("--version")
            .assert()
            .success()
            .stdout("1.3.0\n")
            .stderr(predicate::str::contains("--p\u{fffd}"));
    }
}

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    /// Command isolated from any user config
    fn wasm_ports(dir: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("wasm-ports");
        cmd.env("WASM_PORTS_CONFIG", dir.path().join("config.toml"));
        cmd
    }

    #[test]
    fn help_displays() {
        let dir = TempDir::new().unwrap();
        wasm_ports(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Port descriptors and config-tool shims"));
    }

    #[test]
    fn lib_name_default() {
        let dir = TempDir::new().unwrap();
        wasm_ports(&dir)
            .arg("lib-name")
            .assert()
            .success()
            .stdout("lib_contrib.glfw3-O2.a\n");
    }

    #[test]
    fn lib_name_with_options() {
        let dir = TempDir::new().unwrap();
        wasm_ports(&dir)
            .args([
                "lib-name",
                "-o",
                "disableJoystick=TRUE",
                "-o",
                "optimizationLevel=z",
                "--pthreads",
            ])
            .assert()
            .success()
            .stdout("lib_contrib.glfw3-Oz-nj-mt.a\n");
    }

    #[test]
    fn lib_name_from_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[ports.\"contrib.glfw3\"]\ndisableWarning = true\noptimizationLevel = 3\n",
        )
        .unwrap();

        wasm_ports(&dir)
            .arg("lib-name")
            .assert()
            .success()
            .stdout("lib_contrib.glfw3-O3-nw.a\n");
    }

    #[test]
    fn pthreads_flag_overrides_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "[build]\npthreads = true\n").unwrap();

        wasm_ports(&dir)
            .arg("lib-name")
            .assert()
            .success()
            .stdout("lib_contrib.glfw3-O2-mt.a\n");

        wasm_ports(&dir)
            .args(["lib-name", "--pthreads=false"])
            .assert()
            .success()
            .stdout("lib_contrib.glfw3-O2.a\n");
    }

    #[test]
    fn debug_logging_reports_missing_config() {
        let dir = TempDir::new().unwrap();
        wasm_ports(&dir)
            .args(["-vv", "lib-name"])
            .assert()
            .success()
            .stdout("lib_contrib.glfw3-O2.a\n")
            .stderr(predicate::str::contains("Config file not found"));
    }

    #[test]
    fn invalid_option_fails() {
        let dir = TempDir::new().unwrap();
        wasm_ports(&dir)
            .args(["lib-name", "-o", "optimizationLevel=9"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("[optimizationLevel]"))
            .stderr(predicate::str::contains("got [9]"));
    }

    #[test]
    fn unknown_port_fails() {
        let dir = TempDir::new().unwrap();
        wasm_ports(&dir)
            .args(["--port", "contrib.sdl9", "lib-name"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown port"));
    }

    #[test]
    fn cflags_include_version_define() {
        let dir = TempDir::new().unwrap();
        wasm_ports(&dir)
            .arg("cflags")
            .assert()
            .success()
            .stdout(predicate::str::contains("-isystem"))
            .stdout(predicate::str::contains(
                "-DEMSCRIPTEN_USE_PORT_CONTRIB_GLFW3=34020250305",
            ));
    }

    #[test]
    fn link_respects_disable_webgl2() {
        let dir = TempDir::new().unwrap();
        wasm_ports(&dir)
            .arg("link")
            .assert()
            .success()
            .stdout(predicate::str::contains("lib_emscripten_glfw3.js"))
            .stdout(predicate::str::contains("-sMAX_WEBGL_VERSION=2"));

        wasm_ports(&dir)
            .args(["link", "-o", "disableWebGL2=true"])
            .assert()
            .success()
            .stdout(predicate::str::contains("-sMAX_WEBGL_VERSION=1"));
    }

    #[test]
    fn check_prints_normalized_options() {
        let dir = TempDir::new().unwrap();
        wasm_ports(&dir)
            .args(["check", "-o", "disableWarning=True"])
            .assert()
            .success()
            .stdout(predicate::str::contains("disableWarning=true"))
            .stdout(predicate::str::contains("optimizationLevel=2"));
    }

    #[test]
    fn info_json() {
        let dir = TempDir::new().unwrap();
        wasm_ports(&dir)
            .args(["info", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"name\": \"contrib.glfw3\""))
            .stdout(predicate::str::contains("\"tag\": \"3.4.0.20250305\""));
    }

    #[test]
    fn verify_rejects_wrong_archive() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("glfw.zip");
        fs::write(&archive, b"not the release").unwrap();

        wasm_ports(&dir)
            .arg("verify")
            .arg(&archive)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Integrity check failed"));
    }

    #[test]
    fn config_path() {
        let dir = TempDir::new().unwrap();
        wasm_ports(&dir)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let dir = TempDir::new().unwrap();
        wasm_ports(&dir)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"));
    }
}
