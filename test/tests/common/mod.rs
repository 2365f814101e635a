use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

const TARGET_DIR: &str = "../target/riscv32imac-unknown-none-elf/debug";
const QEMU: &str = "qemu-system-riscv32";

/// Boot a firmware image under QEMU and return everything it printed
/// on the serial line. When `input` is given, the bytes are written to
/// the serial line once the firmware has had time to boot.
///
/// Returns `None` (after logging why) when the image or the emulator
/// is not available, so the suite stays green on hosts without the
/// RISC-V stack.
pub fn run_firmware(name: &str, input: Option<&[u8]>) -> Option<String> {
    let firmware = PathBuf::from(TARGET_DIR).join(name);
    if !firmware.exists() {
        eprintln!(
            "skipping: firmware {} does not exist. Build it first with \
             `cargo build -p {} --target riscv32imac-unknown-none-elf`",
            firmware.display(),
            name
        );
        return None;
    }
    if Command::new(QEMU).arg("--version").output().is_err() {
        eprintln!("skipping: {} is not installed", QEMU);
        return None;
    }

    // Spawn a qemu process with the firmware as machine-mode bios
    let mut child = Command::new(QEMU)
        .args([
            "-M",
            "virt",
            "-m",
            "32M",
            "-nographic",
            "-bios",
            firmware.to_str().unwrap(),
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn qemu");

    // simple timeout: give the firmware some time to print
    thread::sleep(Duration::from_secs(2));

    if let Some(bytes) = input {
        let stdin = child.stdin.as_mut().expect("qemu stdin");
        stdin.write_all(bytes).expect("writing to qemu serial");
        stdin.flush().expect("flushing qemu serial");
        thread::sleep(Duration::from_secs(2));
    }

    // try to stop qemu (ignore errors)
    let _ = child.kill();

    let out = child.wait_with_output().expect("waiting on qemu failed");
    Some(String::from_utf8_lossy(&out.stdout).into_owned())
}
