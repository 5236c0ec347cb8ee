// Line-protocol client for a Minecraft Pi / Raspberry Jam style game server
// Commands are sent as `name(arg,arg,...)\n`; queries answer with a single line.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;

use log::{info, trace};
use nalgebra::Vector3;

use crate::error::SymmetryError;
use crate::world::world_types::{BlockPos, BlockState, HitEvent, World};
use crate::Result;

/// TCP connection to the game server.
#[derive(Debug)]
pub struct McpiConnection {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

impl McpiConnection {
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let stream = TcpStream::connect((host, port)).map_err(|e| {
            SymmetryError::CollaboratorUnavailable(format!(
                "cannot connect to {}:{}: {}",
                host, port, e
            ))
        })?;
        stream.set_nodelay(true)?;
        let writer = stream.try_clone()?;
        info!("Connected to game server at {}:{}", host, port);

        Ok(Self {
            reader: BufReader::new(stream),
            writer,
        })
    }

    fn send(&mut self, command: &str, args: &str) -> Result<()> {
        let line = format!("{}({})\n", command, args);
        trace!("-> {}", line.trim_end());
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn send_receive(&mut self, command: &str, args: &str) -> Result<String> {
        self.send(command, args)?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(SymmetryError::CollaboratorUnavailable(
                "connection closed by game server".to_string(),
            ));
        }
        let reply = line.trim_end_matches(['\r', '\n']).to_string();
        trace!("<- {}", reply);

        if reply == "Fail" {
            return Err(SymmetryError::MalformedResponse(format!(
                "{}({}) failed",
                command, args
            )));
        }
        Ok(reply)
    }
}

impl World for McpiConnection {
    fn player_position(&mut self) -> Result<Vector3<f64>> {
        let reply = self.send_receive("player.getPos", "")?;
        parse_position(&reply)
    }

    fn block_at(&mut self, position: &BlockPos) -> Result<BlockState> {
        let reply = self.send_receive("world.getBlockWithNBT", &format_position(position))?;
        parse_block_state(&reply)
    }

    fn set_block(&mut self, position: &BlockPos, state: &BlockState) -> Result<()> {
        self.send("world.setBlock", &format_block_args(position, state))
    }

    fn poll_block_hits(&mut self) -> Result<Vec<HitEvent>> {
        let reply = self.send_receive("events.block.hits", "")?;
        parse_block_hits(&reply)
    }

    fn post_to_chat(&mut self, message: &str) -> Result<()> {
        let single_line = message.replace(['\r', '\n'], " ");
        self.send("chat.post", &single_line)
    }

    fn restrict_hits_to_sword(&mut self, restrict: bool) -> Result<()> {
        let flag = if restrict { "1" } else { "0" };
        self.send("events.setting", &format!("restrict_to_sword,{}", flag))
    }

    fn clear_events(&mut self) -> Result<()> {
        self.send("events.clearAll", "")
    }
}

fn malformed(what: &str, reply: &str) -> SymmetryError {
    SymmetryError::MalformedResponse(format!("expected {}, got '{}'", what, reply))
}

fn format_position(position: &BlockPos) -> String {
    format!("{},{},{}", position.x, position.y, position.z)
}

fn format_block_args(position: &BlockPos, state: &BlockState) -> String {
    let mut args = format!("{},{},{}", format_position(position), state.id, state.data);
    if let Some(nbt) = &state.nbt {
        args.push(',');
        args.push_str(nbt);
    }
    args
}

fn parse_position(reply: &str) -> Result<Vector3<f64>> {
    let coords: Vec<f64> = reply
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| malformed("x,y,z", reply))?;
    match coords.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(malformed("x,y,z", reply)),
    }
}

fn parse_block_state(reply: &str) -> Result<BlockState> {
    let mut parts = reply.splitn(3, ',');
    let id = parts
        .next()
        .and_then(|s| s.trim().parse::<u16>().ok())
        .ok_or_else(|| malformed("id,data[,nbt]", reply))?;
    let data = match parts.next() {
        Some(s) => s
            .trim()
            .parse::<u8>()
            .map_err(|_| malformed("id,data[,nbt]", reply))?,
        None => 0,
    };

    let state = BlockState::new(id, data);
    Ok(match parts.next() {
        Some(nbt) if !nbt.is_empty() => state.with_nbt(nbt),
        _ => state,
    })
}

fn parse_block_hits(reply: &str) -> Result<Vec<HitEvent>> {
    reply
        .split('|')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            let fields: Vec<&str> = entry.split(',').map(str::trim).collect();
            if fields.len() < 4 {
                return Err(malformed("x,y,z,face,entity", entry));
            }
            let coord = |s: &str| s.parse::<i32>().map_err(|_| malformed("integer coordinate", entry));
            let position = Vector3::new(coord(fields[0])?, coord(fields[1])?, coord(fields[2])?);
            let face = fields[3]
                .parse::<u8>()
                .map_err(|_| malformed("face index", entry))?;
            Ok(HitEvent::new(position, face))
        })
        .collect()
}
