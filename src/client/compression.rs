use crate::commands;
use crate::response::codes;
use crate::Result;
use tracing::{debug, trace, warn};

use super::state::CompressionMode;
use super::NntpClient;

impl NntpClient {
    /// Attempt to enable compression with fallback to GZIP
    ///
    /// This method tries to enable compression on the NNTP connection
    /// using RFC 8054 COMPRESS DEFLATE first (best compression), then
    /// falls back to the legacy XFEATURE COMPRESS GZIP if unavailable.
    ///
    /// Attempts compression in this order:
    /// 1. RFC 8054 COMPRESS DEFLATE (full session) - best compression
    /// 2. XFEATURE COMPRESS GZIP (headers-only) - fallback for compatibility
    /// 3. No compression - if neither is supported
    ///
    /// Returns `true` if any compression mode was enabled, `false` otherwise.
    /// Always returns `Ok` - compression failure is not an error.
    pub async fn try_enable_compression(&mut self) -> Result<bool> {
        // Try RFC 8054 COMPRESS DEFLATE first (full session compression)
        debug!("Attempting RFC 8054 COMPRESS DEFLATE");
        self.send_command(commands::compress_deflate()).await?;
        let response = self.read_response().await?;

        if response.code == codes::COMPRESSION_ACTIVE {
            // 206 = compression active
            self.compression_mode = CompressionMode::FullSession;
            debug!("RFC 8054 COMPRESS DEFLATE enabled (full session compression)");
            return Ok(true);
        }

        // COMPRESS DEFLATE not supported, try XFEATURE COMPRESS GZIP
        debug!(
            "COMPRESS DEFLATE not supported (code {}), trying XFEATURE COMPRESS GZIP",
            response.code
        );
        self.send_command(commands::xfeature_compress_gzip())
            .await?;
        let response = self.read_response().await?;

        if response.is_success() {
            // 290 or 2xx = compression enabled
            self.compression_mode = CompressionMode::HeadersOnly;
            debug!("XFEATURE COMPRESS GZIP enabled (headers-only compression)");
            return Ok(true);
        }

        // No compression available
        debug!(
            "XFEATURE COMPRESS GZIP not supported (code {}), continuing without compression",
            response.code
        );
        Ok(false)
    }

    /// Get bandwidth statistics (compressed vs decompressed bytes)
    ///
    /// Returns `(bytes_compressed, bytes_decompressed)`.
    /// Returns `(0, 0)` if compression is not enabled.
    pub fn get_bandwidth_stats(&self) -> (u64, u64) {
        (self.bytes_compressed, self.bytes_decompressed)
    }

    /// Check if compression is enabled
    pub fn is_compression_enabled(&self) -> bool {
        self.compression_mode != CompressionMode::None
    }

    /// Decompress data based on current compression mode
    pub(super) fn maybe_decompress(&mut self, data: &[u8]) -> Vec<u8> {
        use flate2::read::{DeflateDecoder, ZlibDecoder};
        use std::io::Read;

        match self.compression_mode {
            CompressionMode::None => data.to_vec(),
            CompressionMode::HeadersOnly => {
                // Use zlib decompression (server sends zlib despite calling it "GZIP")
                let mut decoder = ZlibDecoder::new(data);
                // Pre-allocate: compressed data typically expands 3-5x
                let mut decompressed = Vec::with_capacity(data.len() * 3);
                match decoder.read_to_end(&mut decompressed) {
                    Ok(_) => {
                        self.bytes_compressed += data.len() as u64;
                        self.bytes_decompressed += decompressed.len() as u64;
                        trace!(
                            "Decompressed {} bytes to {} bytes (zlib)",
                            data.len(),
                            decompressed.len()
                        );
                        decompressed
                    }
                    Err(e) => {
                        warn!("Zlib decompression failed: {}. Using uncompressed data.", e);
                        data.to_vec()
                    }
                }
            }
            CompressionMode::FullSession => {
                // Use deflate decompression
                let mut decoder = DeflateDecoder::new(data);
                // Pre-allocate: compressed data typically expands 3-5x
                let mut decompressed = Vec::with_capacity(data.len() * 3);
                match decoder.read_to_end(&mut decompressed) {
                    Ok(_) => {
                        self.bytes_compressed += data.len() as u64;
                        self.bytes_decompressed += decompressed.len() as u64;
                        trace!(
                            "Decompressed {} bytes to {} bytes (deflate)",
                            data.len(),
                            decompressed.len()
                        );
                        decompressed
                    }
                    Err(e) => {
                        warn!(
                            "Deflate decompression failed: {}. Using uncompressed data.",
                            e
                        );
                        data.to_vec()
                    }
                }
            }
        }
    }
}
