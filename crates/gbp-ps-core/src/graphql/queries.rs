//! GraphQL documents sent to the Gentoo Build Publisher `/graphql` endpoint.

/// All current build processes. `$machine` is declared but never set by this client.
pub const BUILD_PROCESSES_QUERY: &str = r#"
query BuildProcesses($machine: String = null) {
  buildProcesses(machine: $machine) {
    machine
    id
    buildHost
    package
    phase
    startTime
  }
}"#;

/// Add a build process, or update it if the server already tracks it.
pub const ADD_BUILD_PROCESS_MUTATION: &str = r#"
mutation AddBuildProcess($process: BuildProcessInput!) {
  addBuildProcess(process: $process) {
    message
  }
}"#;
