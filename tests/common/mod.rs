// tests/common/mod.rs
//
// Tiny HTTP/1.1 fixture server: maps request paths to (status, body).
// One thread per connection so concurrent fetches are served concurrently.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    io::{BufRead, BufReader, Write},
    net::{SocketAddr, TcpListener, TcpStream},
    sync::Arc,
    thread,
};

pub struct FixtureServer {
    pub addr: SocketAddr,
}

impl FixtureServer {
    pub fn start(pages: HashMap<String, (u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let pages = Arc::new(pages);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let pages = Arc::clone(&pages);
                thread::spawn(move || serve(stream, &pages));
            }
        });
        Self { addr }
    }

    /// URL template with the version placeholder in the path.
    pub fn template(&self) -> String {
        format!("http://{}/se%s/jvms-4.html#jvms-4.10", self.addr)
    }
}

pub fn path_for(version: u32) -> String {
    format!("/se{version}/jvms-4.html")
}

fn serve(mut stream: TcpStream, pages: &HashMap<String, (u16, String)>) {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // drain headers
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) if line == "\r\n" || line == "\n" => break,
            Ok(_) => continue,
            Err(_) => return,
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = pages
        .get(path)
        .cloned()
        .unwrap_or((404, String::from("<html><body>Not Found</body></html>")));
    let reason = if status == 200 { "OK" } else { "Error" };
    let resp = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(resp.as_bytes());
    let _ = stream.flush();
}

/// A chapter 4 page whose §4.10 holds `rules` followed by the diagram and
/// three trailing appendix listings.
pub fn chapter4(rules: &[&str]) -> String {
    let mut pres = String::new();
    for r in rules {
        pres.push_str(&format!(r#"<pre class="programlisting">{r}</pre>"#));
    }
    pres.push_str(r#"<pre class="programlisting">Verification type hierarchy:

                             top
                 ____________/\____________</pre>"#);
    for tail in ["APPENDIX-ONE", "APPENDIX-TWO", "APPENDIX-THREE"] {
        pres.push_str(&format!(r#"<pre class="programlisting">{tail}</pre>"#));
    }
    format!(
        r#"<!DOCTYPE html><html><head><title>Chapter 4</title></head><body>
<div class="chapter">
  <div class="section"><h2><a name="jvms-4.9"></a>4.9 Constraints</h2>
    <pre class="programlisting">not_a_rule.</pre></div>
  <div class="section"><h2><a name="jvms-4.10"></a>4.10 Verification of class Files</h2>
    {pres}
  </div>
</div></body></html>"#
    )
}
