#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::ffi::{OsStr, OsString};
    use std::fs;
    use std::io;
    use std::os::unix::process::ExitStatusExt;
    use std::path::{Path, PathBuf};
    use std::process::ExitStatus;

    use family_tree::render::{CommandRunner, write_diagram};
    use family_tree::{DiagramConfig, DiagramRunner, FamilyTreeError, render_graph};

    use crate::utils::sample_graph;

    /// Records invocations instead of launching processes
    #[derive(Default)]
    struct RecordingRunner {
        exit_code: i32,
        calls: RefCell<Vec<(OsString, Vec<OsString>, PathBuf)>>,
    }

    impl CommandRunner for RecordingRunner {
        fn run(
            &self,
            program: &OsStr,
            args: &[OsString],
            working_dir: &Path,
        ) -> io::Result<ExitStatus> {
            self.calls.borrow_mut().push((
                program.to_os_string(),
                args.to_vec(),
                working_dir.to_path_buf(),
            ));
            Ok(ExitStatus::from_raw(self.exit_code << 8))
        }
    }

    /// Fails as if the program could not be found
    struct MissingProgramRunner;

    impl CommandRunner for MissingProgramRunner {
        fn run(&self, _: &OsStr, _: &[OsString], _: &Path) -> io::Result<ExitStatus> {
            Err(io::Error::new(io::ErrorKind::NotFound, "program not found"))
        }
    }

    fn config(output_dir: &Path) -> DiagramConfig {
        DiagramConfig {
            plantuml_jar: PathBuf::from("/opt/plantuml/plantuml.jar"),
            output_dir: output_dir.to_path_buf(),
            ..DiagramConfig::default()
        }
    }

    #[test]
    fn test_write_diagram_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("nested").join("output");
        let uml = render_graph(&sample_graph());

        let path = write_diagram(&uml, &output_dir, "all_people").unwrap();
        assert_eq!(path, output_dir.join("all_people.puml"));
        assert_eq!(fs::read_to_string(&path).unwrap(), uml);
    }

    #[test]
    fn test_generate_invokes_plantuml_in_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("output");
        let runner = DiagramRunner::with_runner(config(&output_dir), RecordingRunner::default());

        let path = runner.generate("@startuml\n@enduml\n", "person1").unwrap();
        assert!(path.is_file());

        let calls = runner.runner().calls.borrow();
        assert_eq!(calls.len(), 1);
        let (program, args, working_dir) = &calls[0];
        assert_eq!(program, "java");
        assert_eq!(
            args,
            &[
                OsString::from("-jar"),
                OsString::from("/opt/plantuml/plantuml.jar"),
                OsString::from("person1.puml"),
            ]
        );
        assert_eq!(working_dir, &output_dir);
    }

    #[test]
    fn test_generate_reports_failed_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        let runner = DiagramRunner::with_runner(
            config(dir.path()),
            RecordingRunner {
                exit_code: 1,
                ..RecordingRunner::default()
            },
        );

        let err = runner.generate("@startuml\n@enduml\n", "broken").unwrap_err();
        assert!(matches!(err, FamilyTreeError::Renderer { ref program, .. } if program == "java"));
        // The source is still written for inspection
        assert!(dir.path().join("broken.puml").is_file());
    }

    #[test]
    fn test_generate_blames_java_when_spawn_fails() {
        let dir = tempfile::tempdir().unwrap();
        let runner = DiagramRunner::with_runner(config(dir.path()), MissingProgramRunner);

        let err = runner.generate("@startuml\n@enduml\n", "unlaunched").unwrap_err();
        match err {
            FamilyTreeError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("java"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
        assert!(dir.path().join("unlaunched.puml").is_file());
    }
}
