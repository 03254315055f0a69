use crate::Error;
use std::io::{ErrorKind, Read, Write};
use std::net::TcpStream;
use std::path::{Path, PathBuf};

/// Ask a remote monitor to save all 64K of memory and return the file name.
pub fn snapshot(address: &str) -> Result<PathBuf, Error> {
    let path = snapshot_path();
    log::info!("connecting to monitor at {}", address);
    let mut stream = TcpStream::connect(address)?;
    fetch(&mut stream, &path)?;
    Ok(path)
}

fn snapshot_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    std::env::temp_dir().join(format!("c64.{}.dump", stamp))
}

fn fetch(stream: &mut TcpStream, path: &Path) -> Result<(), Error> {
    command(stream, "r\n")?;
    command(stream, &format!("bsave \"{}\" 0 0000 FFFF\n", path.display()))?;
    // Registers a second time so the save is finished before we read it.
    command(stream, "r\n")?;
    Ok(())
}

fn command(stream: &mut TcpStream, line: &str) -> Result<Vec<u8>, Error> {
    log::debug!("monitor <- {}", line.trim_end());
    stream.write_all(line.as_bytes())?;
    let response = drain(stream)?;
    log::debug!("monitor -> {} bytes", response.len());
    Ok(response)
}

/// Block for the first chunk then take whatever else is already waiting.
fn drain(stream: &mut TcpStream) -> std::io::Result<Vec<u8>> {
    let mut buf = [0u8; 2048];
    let n = stream.read(&mut buf)?;
    let mut response = buf[..n].to_vec();
    stream.set_nonblocking(true)?;
    let result = loop {
        match stream.read(&mut buf) {
            Ok(0) => break Ok(()),
            Ok(n) => response.extend_from_slice(&buf[..n]),
            Err(e) if e.kind() == ErrorKind::WouldBlock => break Ok(()),
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => break Err(e),
        }
    };
    stream.set_nonblocking(false)?;
    result.map(|_| response)
}
