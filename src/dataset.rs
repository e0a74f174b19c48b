//! Built-in MIME type and extension tables.
//!
//! Two read-only tables cover the well-known media types: [`EXTENSIONS`] maps a
//! MIME type to its extensions and [`MIME_TYPES`] maps an extension back to
//! every MIME type claiming it. Both are sorted by key so a lookup is a binary
//! search, and both are plain statics, so any number of resolvers on any number
//! of threads can read them without synchronization.
//!
//! Keys are stored lowercase and trimmed. The lookups here are exact; case and
//! whitespace folding happens in the resolvers.
//!
//! # Examples
//!
//! ```rust
//! use mime_kit::dataset;
//!
//! assert_eq!(dataset::extensions("image/jpeg"), Some(&["jpeg", "jpg", "jpe"][..]));
//! assert_eq!(dataset::mime_types("jpeg"), Some(&["image/jpeg", "image/pjpeg"][..]));
//! assert_eq!(dataset::extensions("IMAGE/JPEG"), None);
//! ```

/// Returns the built-in extensions for an exact MIME type key.
pub fn extensions(mime_type: &str) -> Option<&'static [&'static str]> {
    search(EXTENSIONS, mime_type)
}

/// Returns the built-in MIME types for an exact extension key.
pub fn mime_types(extension: &str) -> Option<&'static [&'static str]> {
    search(MIME_TYPES, extension)
}

fn search(
    table: &'static [(&'static str, &'static [&'static str])],
    key: &str,
) -> Option<&'static [&'static str]> {
    table
        .binary_search_by(|(k, _)| (*k).cmp(key))
        .ok()
        .map(|index| table[index].1)
}

/// Built-in extensions keyed by MIME type, sorted by key.
pub static EXTENSIONS: &[(&str, &[&str])] = &[
    ("application/a2l", &["a2l"]),
    ("application/aml", &["aml"]),
    ("application/andrew-inset", &["ez"]),
    ("application/annodex", &["anx"]),
    ("application/atf", &["atf"]),
    ("application/atfx", &["atfx"]),
    ("application/atom+xml", &["atom"]),
    ("application/atomcat+xml", &["atomcat"]),
    ("application/atomdeleted+xml", &["atomdeleted"]),
    ("application/atomserv+xml", &["atomsrv"]),
    ("application/atomsvc+xml", &["atomsvc"]),
    ("application/atsc-dwd+xml", &["dwd"]),
    ("application/atsc-held+xml", &["held"]),
    ("application/atsc-rsat+xml", &["rsat"]),
    ("application/atxml", &["atxml"]),
    ("application/auth-policy+xml", &["apxml"]),
    ("application/automationml-amlx+zip", &["amlx"]),
    ("application/bacnet-xdd+zip", &["xdd"]),
    ("application/bbolin", &["lin"]),
    ("application/calendar+xml", &["xcs"]),
    ("application/cbor", &["cbor"]),
    ("application/cccex", &["c3ex"]),
    ("application/ccmp+xml", &["ccmp"]),
    ("application/ccxml+xml", &["ccxml"]),
    ("application/cdfx+xml", &["cdfx"]),
    ("application/cdmi-capability", &["cdmia"]),
    ("application/cdmi-container", &["cdmic"]),
    ("application/cdmi-domain", &["cdmid"]),
    ("application/cdmi-object", &["cdmio"]),
    ("application/cdmi-queue", &["cdmiq"]),
    ("application/cea", &["cea"]),
    ("application/cellml+xml", &["cellml", "cml"]),
    ("application/clr", &["1clr"]),
    ("application/clue_info+xml", &["clue"]),
    ("application/cms", &["cmsc"]),
    ("application/cpl+xml", &["cpl"]),
    ("application/csrattrs", &["csrattrs"]),
    ("application/cu-seeme", &["cu"]),
    ("application/cwl", &["cwl"]),
    ("application/cwl+json", &["cwl.json"]),
    ("application/dash+xml", &["mpd"]),
    ("application/dashdelta", &["mpdd"]),
    ("application/davmount+xml", &["davmount"]),
    ("application/dcd", &["dcd"]),
    ("application/dicom", &["dcm"]),
    ("application/dii", &["dii"]),
    ("application/dit", &["dit"]),
    ("application/dskpp+xml", &["xmls"]),
    ("application/dsptype", &["tsp"]),
    ("application/dssc+der", &["dssc"]),
    ("application/dssc+xml", &["xdssc"]),
    ("application/dvcs", &["dvc"]),
    ("application/efi", &["efi"]),
    ("application/emma+xml", &["emma"]),
    ("application/emotionml+xml", &["emotionml"]),
    ("application/epub+zip", &["epub"]),
    ("application/exi", &["exi"]),
    ("application/express", &["exp"]),
    ("application/fastinfoset", &["finf"]),
    ("application/fdf", &["fdf"]),
    ("application/fdt+xml", &["fdt"]),
    ("application/font-tdpfr", &["pfr"]),
    ("application/futuresplash", &["spl"]),
    ("application/geo+json", &["geojson"]),
    ("application/geopackage+sqlite3", &["gpkg"]),
    ("application/gltf-buffer", &["glbin", "glbuf"]),
    ("application/gml+xml", &["gml"]),
    ("application/gzip", &["gz"]),
    ("application/hta", &["hta"]),
    ("application/hyperstudio", &["stk"]),
    ("application/inkml+xml", &["ink", "inkml"]),
    ("application/ipfix", &["ipfix"]),
    ("application/its+xml", &["its"]),
    ("application/java-archive", &["jar"]),
    ("application/java-serialized-object", &["ser"]),
    ("application/java-vm", &["class"]),
    ("application/javascript", &["js", "mjs"]),
    ("application/jrd+json", &["jrd"]),
    ("application/json", &["json"]),
    ("application/json-patch+json", &["json-patch"]),
    ("application/ld+json", &["jsonld"]),
    ("application/lgr+xml", &["lgr"]),
    ("application/link-format", &["wlnk"]),
    ("application/lost+xml", &["lostxml"]),
    ("application/lostsync+xml", &["lostsyncxml"]),
    ("application/lpf+zip", &["lpf"]),
    ("application/lxf", &["lxf"]),
    ("application/m3g", &["m3g"]),
    ("application/mac-binhex40", &["hqx"]),
    ("application/mac-compactpro", &["cpt"]),
    ("application/mads+xml", &["mads"]),
    ("application/manifest+json", &["webmanifest"]),
    ("application/marc", &["mrc"]),
    ("application/marcxml+xml", &["mrcx"]),
    ("application/mathematica", &["ma", "mb"]),
    ("application/mathml+xml", &["mml"]),
    ("application/mbox", &["mbox"]),
    ("application/metalink4+xml", &["meta4"]),
    ("application/mets+xml", &["mets"]),
    ("application/mf4", &["mf4"]),
    ("application/mmt-aei+xml", &["maei"]),
    ("application/mmt-usd+xml", &["musd"]),
    ("application/mods+xml", &["mods"]),
    ("application/mp21", &["m21", "mp21"]),
    ("application/msaccess", &["mdb"]),
    ("application/msword", &["doc"]),
    ("application/mxf", &["mxf"]),
    ("application/n-quads", &["nq"]),
    ("application/n-triples", &["nt"]),
    ("application/ocsp-request", &["orq"]),
    ("application/ocsp-response", &["ors"]),
    ("application/octet-stream", &["bin", "deploy", "msu", "msp"]),
    ("application/oda", &["oda"]),
    ("application/odx", &["odx"]),
    ("application/oebps-package+xml", &["opf"]),
    ("application/ogg", &["ogx"]),
    ("application/onenote", &["one", "onetoc2", "onetmp", "onepkg"]),
    ("application/oxps", &["oxps"]),
    ("application/p21", &["p21", "stpnc", "210", "ifc"]),
    ("application/p2p-overlay+xml", &["relo"]),
    ("application/pdf", &["pdf"]),
    ("application/pdx", &["pdx"]),
    ("application/pem-certificate-chain", &["pem"]),
    ("application/pgp-encrypted", &["pgp"]),
    ("application/pgp-keys", &["asc", "key"]),
    ("application/pgp-signature", &["sig"]),
    ("application/pics-rules", &["prf"]),
    ("application/pkcs10", &["p10"]),
    ("application/pkcs12", &["p12", "pfx"]),
    ("application/pkcs7-mime", &["p7m", "p7c", "p7z"]),
    ("application/pkcs7-signature", &["p7s"]),
    ("application/pkcs8", &["p8"]),
    ("application/pkcs8-encrypted", &["p8e"]),
    ("application/pkix-attr-cert", &["ac"]),
    ("application/pkix-cert", &["cer"]),
    ("application/pkix-crl", &["crl"]),
    ("application/pkix-pkipath", &["pkipath"]),
    ("application/pkixcmp", &["pki"]),
    ("application/postscript", &["ps", "ai", "eps", "epsi", "epsf", "eps2", "eps3"]),
    ("application/provenance+xml", &["provx"]),
    ("application/prs.cww", &["cw", "cww"]),
    ("application/prs.hpub+zip", &["hpub"]),
    ("application/prs.nprend", &["rnd", "rct"]),
    ("application/prs.rdf-xml-crypt", &["rdf-crypt"]),
    ("application/prs.xsf+xml", &["xsf"]),
    ("application/pskc+xml", &["pskcxml"]),
    ("application/rdf+xml", &["rdf"]),
    ("application/reginfo+xml", &["rif"]),
    ("application/relax-ng-compact-syntax", &["rnc"]),
    ("application/resource-lists+xml", &["rl"]),
    ("application/resource-lists-diff+xml", &["rld"]),
    ("application/rfc+xml", &["rfcxml"]),
    ("application/rls-services+xml", &["rs"]),
    ("application/route-apd+xml", &["rapd"]),
    ("application/route-s-tsid+xml", &["sls"]),
    ("application/route-usd+xml", &["rusd"]),
    ("application/rpki-ghostbusters", &["gbr"]),
    ("application/rpki-manifest", &["mft"]),
    ("application/rpki-roa", &["roa"]),
    ("application/rtf", &["rtf"]),
    ("application/sarif+json", &["sarif", "sarif.json"]),
    (
        "application/sarif-external-properties+json",
        &[
            "sarif-external-properties",
            "sarif-external-properties.json",
        ],
    ),
    ("application/scim+json", &["scim"]),
    ("application/scvp-cv-request", &["scq"]),
    ("application/scvp-cv-response", &["scs"]),
    ("application/scvp-vp-request", &["spq"]),
    ("application/scvp-vp-response", &["spp"]),
    ("application/sdp", &["sdp"]),
    ("application/senml+cbor", &["senmlc"]),
    ("application/senml+json", &["senml"]),
    ("application/senml+xml", &["senmlx"]),
    ("application/senml-etch+cbor", &["senml-etchc"]),
    ("application/senml-etch+json", &["senml-etchj"]),
    ("application/senml-exi", &["senmle"]),
    ("application/sensml+cbor", &["sensmlc"]),
    ("application/sensml+json", &["sensml"]),
    ("application/sensml+xml", &["sensmlx"]),
    ("application/sensml-exi", &["sensmle"]),
    ("application/sgml-open-catalog", &["soc"]),
    ("application/shf+xml", &["shf"]),
    ("application/sieve", &["siv", "sieve"]),
    ("application/simple-filter+xml", &["cl"]),
    ("application/smil+xml", &["smil", "smi", "sml"]),
    ("application/sparql-query", &["rq"]),
    ("application/sparql-results+xml", &["srx"]),
    ("application/spdx+json", &["spdx.json"]),
    ("application/sql", &["sql"]),
    ("application/srgs", &["gram"]),
    ("application/srgs+xml", &["grxml"]),
    ("application/sru+xml", &["sru"]),
    ("application/ssml+xml", &["ssml"]),
    ("application/stix+json", &["stix"]),
    ("application/swid+cbor", &["coswid"]),
    ("application/swid+xml", &["swidtag"]),
    ("application/tamp-apex-update", &["tau"]),
    ("application/tamp-apex-update-confirm", &["auc"]),
    ("application/tamp-community-update", &["tcu"]),
    ("application/tamp-community-update-confirm", &["cuc"]),
    ("application/tamp-error", &["ter"]),
    ("application/tamp-sequence-adjust", &["tsa"]),
    ("application/tamp-sequence-adjust-confirm", &["sac"]),
    ("application/tamp-update", &["tur"]),
    ("application/tamp-update-confirm", &["tuc"]),
    ("application/td+json", &["jsontd"]),
    ("application/tei+xml", &["tei", "teicorpus", "odd"]),
    ("application/thraud+xml", &["tfi"]),
    ("application/timestamp-query", &["tsq"]),
    ("application/timestamp-reply", &["tsr"]),
    ("application/timestamped-data", &["tsd"]),
    ("application/tm+json", &["tm.jsonld", "tm.json", "jsontm"]),
    ("application/toml", &["toml"]),
    ("application/trig", &["trig"]),
    ("application/ttml+xml", &["ttml"]),
    ("application/urc-grpsheet+xml", &["gsheet"]),
    ("application/urc-ressheet+xml", &["rsheet"]),
    ("application/urc-targetdesc+xml", &["td"]),
    ("application/urc-uisocketdesc+xml", &["uis"]),
    ("application/voicexml+xml", &["vxml"]),
    ("application/voucher-cms+json", &["vcj"]),
    ("application/wasm", &["wasm"]),
    ("application/watcherinfo+xml", &["wif"]),
    ("application/widget", &["wgt"]),
    ("application/wsdl+xml", &["wsdl"]),
    ("application/wspolicy+xml", &["wspolicy"]),
    ("application/x-123", &["wk"]),
    ("application/x-7z-compressed", &["7z"]),
    ("application/x-abiword", &["abw"]),
    ("application/x-apple-diskimage", &["dmg"]),
    ("application/x-bcpio", &["bcpio"]),
    ("application/x-bittorrent", &["torrent"]),
    ("application/x-cdf", &["cdf", "cda"]),
    ("application/x-cdlink", &["vcd"]),
    ("application/x-comsol", &["mph"]),
    ("application/x-cpio", &["cpio"]),
    ("application/x-csh", &["csh"]),
    ("application/x-director", &["dcr", "dir", "dxr"]),
    ("application/x-doom", &["wad"]),
    ("application/x-dvi", &["dvi"]),
    ("application/x-font", &["pfa", "pfb", "gsf"]),
    ("application/x-font-pcf", &["pcf", "pcf.z"]),
    ("application/x-freemind", &["mm"]),
    ("application/x-ganttproject", &["gan"]),
    ("application/x-gnumeric", &["gnumeric"]),
    ("application/x-go-sgf", &["sgf"]),
    ("application/x-graphing-calculator", &["gcf"]),
    ("application/x-gtar", &["gtar"]),
    ("application/x-gtar-compressed", &["tgz", "taz"]),
    ("application/x-hdf", &["hdf"]),
    ("application/x-hwp", &["hwp"]),
    ("application/x-ica", &["ica"]),
    ("application/x-info", &["info"]),
    ("application/x-internet-signup", &["ins", "isp"]),
    ("application/x-iphone", &["iii"]),
    ("application/x-iso9660-image", &["iso"]),
    ("application/x-java-jnlp-file", &["jnlp"]),
    ("application/x-jmol", &["jmz"]),
    ("application/x-killustrator", &["kil"]),
    ("application/x-latex", &["latex"]),
    ("application/x-lha", &["lha"]),
    ("application/x-lyx", &["lyx"]),
    ("application/x-lzh", &["lzh"]),
    ("application/x-lzx", &["lzx"]),
    ("application/x-maker", &["frm", "maker", "frame", "fm", "fb", "book", "fbdoc"]),
    ("application/x-ms-wmd", &["wmd"]),
    ("application/x-ms-wmz", &["wmz"]),
    ("application/x-msdos-program", &["com", "exe", "bat", "dll"]),
    ("application/x-msi", &["msi"]),
    ("application/x-netcdf", &["nc"]),
    ("application/x-ns-proxy-autoconfig", &["pac"]),
    ("application/x-nwc", &["nwc"]),
    ("application/x-object", &["o"]),
    ("application/x-oz-application", &["oza"]),
    ("application/x-pkcs7-certreqresp", &["p7r"]),
    ("application/x-python-code", &["pyc", "pyo"]),
    ("application/x-qgis", &["qgs", "shp", "shx"]),
    ("application/x-quicktimeplayer", &["qtl"]),
    ("application/x-rdp", &["rdp"]),
    ("application/x-redhat-package-manager", &["rpm"]),
    ("application/x-rss+xml", &["rss"]),
    ("application/x-ruby", &["rb"]),
    ("application/x-scilab", &["sci", "sce"]),
    ("application/x-scilab-xcos", &["xcos"]),
    ("application/x-sh", &["sh"]),
    ("application/x-shar", &["shar"]),
    ("application/x-silverlight", &["scr"]),
    ("application/x-stuffit", &["sit", "sitx"]),
    ("application/x-sv4cpio", &["sv4cpio"]),
    ("application/x-sv4crc", &["sv4crc"]),
    ("application/x-tar", &["tar"]),
    ("application/x-tcl", &["tcl"]),
    ("application/x-tex-gf", &["gf"]),
    ("application/x-tex-pk", &["pk"]),
    ("application/x-texinfo", &["texinfo", "texi"]),
    ("application/x-trash", &["bak", "old", "sik"]),
    ("application/x-troff-man", &["man"]),
    ("application/x-troff-me", &["me"]),
    ("application/x-troff-ms", &["ms"]),
    ("application/x-ustar", &["ustar"]),
    ("application/x-wais-source", &["src"]),
    ("application/x-wingz", &["wz"]),
    ("application/x-x509-ca-cert", &["crt"]),
    ("application/x-xfig", &["fig"]),
    ("application/x-xpinstall", &["xpi"]),
    ("application/x-xz", &["xz"]),
    ("application/xcap-att+xml", &["xav"]),
    ("application/xcap-caps+xml", &["xca"]),
    ("application/xcap-diff+xml", &["xdf"]),
    ("application/xcap-el+xml", &["xel"]),
    ("application/xcap-error+xml", &["xer"]),
    ("application/xcap-ns+xml", &["xns"]),
    ("application/xfdf", &["xfdf"]),
    ("application/xhtml+xml", &["xhtml", "xhtm", "xht"]),
    ("application/xliff+xml", &["xlf"]),
    ("application/xml", &["xml"]),
    ("application/xml-dtd", &["dtd", "mod"]),
    ("application/xml-external-parsed-entity", &["ent"]),
    ("application/xop+xml", &["xop"]),
    ("application/xslt+xml", &["xsl", "xslt"]),
    ("application/xspf+xml", &["xspf"]),
    ("application/xv+xml", &["mxml", "xhvml", "xvml", "xvm"]),
    ("application/yang", &["yang"]),
    ("application/yin+xml", &["yin"]),
    ("application/zip", &["zip"]),
    ("application/zstd", &["zst"]),
    ("audio/32kadpcm", &["726"]),
    ("audio/aac", &["adts", "aac", "ass"]),
    ("audio/ac3", &["ac3"]),
    ("audio/amr", &["amr"]),
    ("audio/amr-wb", &["awb"]),
    ("audio/annodex", &["axa"]),
    ("audio/asc", &["acn"]),
    ("audio/atrac-advanced-lossless", &["aal"]),
    ("audio/atrac-x", &["atx"]),
    ("audio/atrac3", &["at3", "aa3", "omg"]),
    ("audio/basic", &["au", "snd"]),
    ("audio/csound", &["csd", "orc", "sco"]),
    ("audio/dls", &["dls"]),
    ("audio/evrc", &["evc"]),
    ("audio/evrc-qcp", &["qcp"]),
    ("audio/evrcb", &["evb"]),
    ("audio/evrcnw", &["enw"]),
    ("audio/evrcwb", &["evw"]),
    ("audio/flac", &["flac"]),
    ("audio/ilbc", &["lbc"]),
    ("audio/l16", &["l16"]),
    ("audio/mhas", &["mhas"]),
    ("audio/mobile-xmf", &["mxmf"]),
    ("audio/mp4", &["m4a"]),
    ("audio/mpeg", &["mpga", "mpega", "mp1", "mp2", "mp3"]),
    ("audio/mpegurl", &["m3u"]),
    ("audio/ogg", &["oga", "ogg", "opus", "spx"]),
    ("audio/prs.sid", &["sid", "psid"]),
    ("audio/smv", &["smv"]),
    ("audio/sofa", &["sofa"]),
    ("audio/sp-midi", &["mid"]),
    ("audio/usac", &["loas", "xhe"]),
    ("audio/x-aiff", &["aif", "aiff", "aifc"]),
    ("audio/x-gsm", &["gsm"]),
    ("audio/x-ms-wax", &["wax"]),
    ("audio/x-ms-wma", &["wma"]),
    ("audio/x-pn-realaudio", &["ra", "rm", "ram"]),
    ("audio/x-scpls", &["pls"]),
    ("audio/x-sd2", &["sd2"]),
    ("audio/x-wav", &["wav"]),
    ("font/collection", &["ttc"]),
    ("font/otf", &["otf"]),
    ("font/ttf", &["ttf"]),
    ("font/woff", &["woff"]),
    ("font/woff2", &["woff2"]),
    ("image/aces", &["exr"]),
    ("image/apng", &["apng"]),
    ("image/avci", &["avci"]),
    ("image/avcs", &["avcs"]),
    ("image/avif", &["avif", "hif"]),
    ("image/bmp", &["bmp"]),
    ("image/cgm", &["cgm"]),
    ("image/dicom-rle", &["drle"]),
    ("image/dpx", &["dpx"]),
    ("image/emf", &["emf"]),
    ("image/fits", &["fits", "fit", "fts"]),
    ("image/gif", &["gif"]),
    ("image/heic", &["heic"]),
    ("image/heic-sequence", &["heics"]),
    ("image/heif", &["heif"]),
    ("image/heif-sequence", &["heifs"]),
    ("image/hej2k", &["hej2"]),
    ("image/hsj2", &["hsj2"]),
    ("image/ief", &["ief"]),
    ("image/jls", &["jls"]),
    ("image/jp2", &["jp2", "jpg2"]),
    ("image/jpeg", &["jpeg", "jpg", "jpe"]),
    ("image/jph", &["jph"]),
    ("image/jphc", &["jhc", "jphc"]),
    ("image/jpm", &["jpm", "jpgm"]),
    ("image/jpx", &["jpx", "jpf"]),
    ("image/jxl", &["jxl"]),
    ("image/jxr", &["jxr"]),
    ("image/jxra", &["jxra"]),
    ("image/jxrs", &["jxrs"]),
    ("image/jxs", &["jxs"]),
    ("image/jxsc", &["jxsc"]),
    ("image/jxsi", &["jxsi"]),
    ("image/jxss", &["jxss"]),
    ("image/ktx", &["ktx"]),
    ("image/ktx2", &["ktx2"]),
    ("image/pjpeg", &["jpeg", "jpg", "jpe", "jfif"]),
    ("image/png", &["png"]),
    ("image/prs.btif", &["btif", "btf"]),
    ("image/prs.pti", &["pti"]),
    ("image/svg+xml", &["svg", "svgz"]),
    ("image/tiff", &["tiff", "tif"]),
    ("image/tiff-fx", &["tfx"]),
    ("image/webp", &["webp"]),
    ("image/wmf", &["wmf"]),
    ("image/x-canon-cr2", &["cr2"]),
    ("image/x-canon-crw", &["crw"]),
    ("image/x-cmu-raster", &["ras"]),
    ("image/x-coreldraw", &["cdr"]),
    ("image/x-coreldrawpattern", &["pat"]),
    ("image/x-coreldrawtemplate", &["cdt"]),
    ("image/x-corelphotopaint", &["cpt"]),
    ("image/x-epson-erf", &["erf"]),
    ("image/x-icon", &["ico"]),
    ("image/x-jg", &["art"]),
    ("image/x-jng", &["jng"]),
    ("image/x-nikon-nef", &["nef"]),
    ("image/x-olympus-orf", &["orf"]),
    ("image/x-portable-anymap", &["pnm"]),
    ("image/x-portable-bitmap", &["pbm"]),
    ("image/x-portable-graymap", &["pgm"]),
    ("image/x-portable-pixmap", &["ppm"]),
    ("image/x-rgb", &["rgb"]),
    ("image/x-xbitmap", &["xbm"]),
    ("image/x-xcf", &["xcf"]),
    ("image/x-xpixmap", &["xpm"]),
    ("image/x-xwindowdump", &["xwd"]),
    ("message/global", &["u8msg"]),
    ("message/global-delivery-status", &["u8dsn"]),
    ("message/global-disposition-notification", &["u8mdn"]),
    ("message/global-headers", &["u8hdr"]),
    ("message/rfc822", &["eml", "mail", "art"]),
    ("model/gltf+json", &["gltf"]),
    ("model/gltf-binary", &["glb"]),
    ("model/iges", &["igs", "iges"]),
    ("model/jt", &["jt"]),
    ("model/mesh", &["msh", "mesh", "silo"]),
    ("model/mtl", &["mtl"]),
    ("model/obj", &["obj"]),
    ("model/prc", &["prc"]),
    ("model/step", &["stp", "step"]),
    ("model/step+xml", &["stpx"]),
    ("model/step+zip", &["stpz"]),
    ("model/step-xml+zip", &["stpxz"]),
    ("model/stl", &["stl"]),
    ("model/u3d", &["u3d"]),
    ("model/vrml", &["wrl", "vrm", "vrml"]),
    ("model/x3d+fastinfoset", &["x3db"]),
    ("model/x3d+xml", &["x3d", "x3dz"]),
    ("model/x3d-vrml", &["x3dv", "x3dvz"]),
    ("multipart/voice-message", &["vpm"]),
    ("text/cache-manifest", &["appcache", "manifest"]),
    ("text/calendar", &["ics", "ifb"]),
    ("text/cql", &["cql"]),
    ("text/css", &["css"]),
    ("text/csv", &["csv"]),
    ("text/csv-schema", &["csvs"]),
    ("text/dns", &["soa", "zone"]),
    ("text/gff3", &["gff3"]),
    ("text/html", &["html", "htm", "shtml"]),
    ("text/javascript", &["es", "js", "mjs"]),
    ("text/jcr-cnd", &["cnd"]),
    ("text/markdown", &["md", "markdown"]),
    ("text/mizar", &["miz"]),
    ("text/n3", &["n3"]),
    ("text/plain", &["txt", "text", "pot", "brf", "srt"]),
    ("text/provenance-notation", &["provn"]),
    ("text/prs.fallenstein.rst", &["rst"]),
    ("text/prs.lines.tag", &["tag", "dsc"]),
    ("text/sgml", &["sgml", "sgm"]),
    ("text/shaclc", &["shaclc", "shc"]),
    ("text/shex", &["shex"]),
    ("text/spdx", &["spdx"]),
    ("text/tab-separated-values", &["tsv"]),
    ("text/texmacs", &["tm"]),
    ("text/troff", &["t", "tr", "roff"]),
    ("text/turtle", &["ttl"]),
    ("text/uri-list", &["uris", "uri"]),
    ("text/vcard", &["vcf", "vcard"]),
    ("text/vtt", &["vtt"]),
    ("text/wgsl", &["wgsl"]),
    ("text/x-bibtex", &["bib"]),
    ("text/x-boo", &["boo"]),
    ("text/x-c++hdr", &["h++", "hpp", "hxx", "hh"]),
    ("text/x-c++src", &["c++", "cpp", "cxx", "cc"]),
    ("text/x-chdr", &["h"]),
    ("text/x-component", &["htc"]),
    ("text/x-csh", &["csh"]),
    ("text/x-csrc", &["c"]),
    ("text/x-diff", &["diff", "patch"]),
    ("text/x-dsrc", &["d"]),
    ("text/x-haskell", &["hs"]),
    ("text/x-java", &["java"]),
    ("text/x-lilypond", &["ly"]),
    ("text/x-literate-haskell", &["lhs"]),
    ("text/x-moc", &["moc"]),
    ("text/x-pascal", &["p", "pas"]),
    ("text/x-pcs-gcd", &["gcd"]),
    ("text/x-perl", &["pl", "pm"]),
    ("text/x-python", &["py"]),
    ("text/x-rust", &["rs"]),
    ("text/x-scala", &["scala"]),
    ("text/x-setext", &["etx"]),
    ("text/x-sfv", &["sfv"]),
    ("text/x-sh", &["sh"]),
    ("text/x-tcl", &["tcl", "tk"]),
    ("text/x-tex", &["tex", "ltx", "sty", "cls"]),
    ("text/x-vcalendar", &["vcs"]),
    ("video/annodex", &["axv"]),
    ("video/dv", &["dif", "dv"]),
    ("video/fli", &["fli"]),
    ("video/gl", &["gl"]),
    ("video/iso.segment", &["m4s"]),
    ("video/mj2", &["mj2", "mjp2"]),
    ("video/mp4", &["mp4", "mpg4", "m4v"]),
    ("video/mpeg", &["mpeg", "mpg", "mpe", "m1v", "m2v"]),
    ("video/ogg", &["ogv"]),
    ("video/quicktime", &["qt", "mov"]),
    ("video/webm", &["webm"]),
    ("video/x-flv", &["flv"]),
    ("video/x-la-asf", &["lsf", "lsx"]),
    ("video/x-matroska", &["mpv", "mkv"]),
    ("video/x-mng", &["mng"]),
    ("video/x-ms-wm", &["wm"]),
    ("video/x-ms-wmv", &["wmv"]),
    ("video/x-ms-wmx", &["wmx"]),
    ("video/x-ms-wvx", &["wvx"]),
    ("video/x-msvideo", &["avi"]),
    ("video/x-sgi-movie", &["movie"]),
];

/// Built-in MIME types keyed by extension, sorted by key.
pub static MIME_TYPES: &[(&str, &[&str])] = &[
    ("1clr", &["application/clr"]),
    ("210", &["application/p21"]),
    ("726", &["audio/32kadpcm"]),
    ("7z", &["application/x-7z-compressed"]),
    ("a2l", &["application/a2l"]),
    ("aa3", &["audio/atrac3"]),
    ("aac", &["audio/aac"]),
    ("aal", &["audio/atrac-advanced-lossless"]),
    ("abw", &["application/x-abiword"]),
    ("ac", &["application/pkix-attr-cert"]),
    ("ac3", &["audio/ac3"]),
    ("acn", &["audio/asc"]),
    ("adts", &["audio/aac"]),
    ("ai", &["application/postscript"]),
    ("aif", &["audio/x-aiff"]),
    ("aifc", &["audio/x-aiff"]),
    ("aiff", &["audio/x-aiff"]),
    ("aml", &["application/aml"]),
    ("amlx", &["application/automationml-amlx+zip"]),
    ("amr", &["audio/amr"]),
    ("anx", &["application/annodex"]),
    ("apng", &["image/apng"]),
    ("appcache", &["text/cache-manifest"]),
    ("apxml", &["application/auth-policy+xml"]),
    ("art", &["image/x-jg", "message/rfc822"]),
    ("asc", &["application/pgp-keys"]),
    ("ass", &["audio/aac"]),
    ("at3", &["audio/atrac3"]),
    ("atf", &["application/atf"]),
    ("atfx", &["application/atfx"]),
    ("atom", &["application/atom+xml"]),
    ("atomcat", &["application/atomcat+xml"]),
    ("atomdeleted", &["application/atomdeleted+xml"]),
    ("atomsrv", &["application/atomserv+xml"]),
    ("atomsvc", &["application/atomsvc+xml"]),
    ("atx", &["audio/atrac-x"]),
    ("atxml", &["application/atxml"]),
    ("au", &["audio/basic"]),
    ("auc", &["application/tamp-apex-update-confirm"]),
    ("avci", &["image/avci"]),
    ("avcs", &["image/avcs"]),
    ("avi", &["video/x-msvideo"]),
    ("avif", &["image/avif"]),
    ("awb", &["audio/amr-wb"]),
    ("axa", &["audio/annodex"]),
    ("axv", &["video/annodex"]),
    ("bak", &["application/x-trash"]),
    ("bat", &["application/x-msdos-program"]),
    ("bcpio", &["application/x-bcpio"]),
    ("bib", &["text/x-bibtex"]),
    ("bin", &["application/octet-stream"]),
    ("bmp", &["image/bmp"]),
    ("boo", &["text/x-boo"]),
    ("book", &["application/x-maker"]),
    ("brf", &["text/plain"]),
    ("btf", &["image/prs.btif"]),
    ("btif", &["image/prs.btif"]),
    ("c", &["text/x-csrc"]),
    ("c++", &["text/x-c++src"]),
    ("c3ex", &["application/cccex"]),
    ("cbor", &["application/cbor"]),
    ("cc", &["text/x-c++src"]),
    ("ccmp", &["application/ccmp+xml"]),
    ("ccxml", &["application/ccxml+xml"]),
    ("cda", &["application/x-cdf"]),
    ("cdf", &["application/x-cdf"]),
    ("cdfx", &["application/cdfx+xml"]),
    ("cdmia", &["application/cdmi-capability"]),
    ("cdmic", &["application/cdmi-container"]),
    ("cdmid", &["application/cdmi-domain"]),
    ("cdmio", &["application/cdmi-object"]),
    ("cdmiq", &["application/cdmi-queue"]),
    ("cdr", &["image/x-coreldraw"]),
    ("cdt", &["image/x-coreldrawtemplate"]),
    ("cea", &["application/cea"]),
    ("cellml", &["application/cellml+xml"]),
    ("cer", &["application/pkix-cert"]),
    ("cgm", &["image/cgm"]),
    ("cl", &["application/simple-filter+xml"]),
    ("class", &["application/java-vm"]),
    ("cls", &["text/x-tex"]),
    ("clue", &["application/clue_info+xml"]),
    ("cml", &["application/cellml+xml"]),
    ("cmsc", &["application/cms"]),
    ("cnd", &["text/jcr-cnd"]),
    ("com", &["application/x-msdos-program"]),
    ("coswid", &["application/swid+cbor"]),
    ("cpio", &["application/x-cpio"]),
    ("cpl", &["application/cpl+xml"]),
    ("cpp", &["text/x-c++src"]),
    ("cpt", &["application/mac-compactpro", "image/x-corelphotopaint"]),
    ("cql", &["text/cql"]),
    ("cr2", &["image/x-canon-cr2"]),
    ("crl", &["application/pkix-crl"]),
    ("crt", &["application/x-x509-ca-cert"]),
    ("crw", &["image/x-canon-crw"]),
    ("csd", &["audio/csound"]),
    ("csh", &["application/x-csh", "text/x-csh"]),
    ("csrattrs", &["application/csrattrs"]),
    ("css", &["text/css"]),
    ("csv", &["text/csv"]),
    ("csvs", &["text/csv-schema"]),
    ("cu", &["application/cu-seeme"]),
    ("cuc", &["application/tamp-community-update-confirm"]),
    ("cw", &["application/prs.cww"]),
    ("cwl", &["application/cwl"]),
    ("cwl.json", &["application/cwl+json"]),
    ("cww", &["application/prs.cww"]),
    ("cxx", &["text/x-c++src"]),
    ("d", &["text/x-dsrc"]),
    ("davmount", &["application/davmount+xml"]),
    ("dcd", &["application/dcd"]),
    ("dcm", &["application/dicom"]),
    ("dcr", &["application/x-director"]),
    ("deploy", &["application/octet-stream"]),
    ("dif", &["video/dv"]),
    ("diff", &["text/x-diff"]),
    ("dii", &["application/dii"]),
    ("dir", &["application/x-director"]),
    ("dit", &["application/dit"]),
    ("dll", &["application/x-msdos-program"]),
    ("dls", &["audio/dls"]),
    ("dmg", &["application/x-apple-diskimage"]),
    ("doc", &["application/msword"]),
    ("dpx", &["image/dpx"]),
    ("drle", &["image/dicom-rle"]),
    ("dsc", &["text/prs.lines.tag"]),
    ("dssc", &["application/dssc+der"]),
    ("dtd", &["application/xml-dtd"]),
    ("dv", &["video/dv"]),
    ("dvc", &["application/dvcs"]),
    ("dvi", &["application/x-dvi"]),
    ("dwd", &["application/atsc-dwd+xml"]),
    ("dxr", &["application/x-director"]),
    ("efi", &["application/efi"]),
    ("emf", &["image/emf"]),
    ("eml", &["message/rfc822"]),
    ("emma", &["application/emma+xml"]),
    ("emotionml", &["application/emotionml+xml"]),
    ("ent", &["application/xml-external-parsed-entity"]),
    ("enw", &["audio/evrcnw"]),
    ("eps", &["application/postscript"]),
    ("eps2", &["application/postscript"]),
    ("eps3", &["application/postscript"]),
    ("epsf", &["application/postscript"]),
    ("epsi", &["application/postscript"]),
    ("epub", &["application/epub+zip"]),
    ("erf", &["image/x-epson-erf"]),
    ("es", &["text/javascript"]),
    ("etx", &["text/x-setext"]),
    ("evb", &["audio/evrcb"]),
    ("evc", &["audio/evrc"]),
    ("evw", &["audio/evrcwb"]),
    ("exe", &["application/x-msdos-program"]),
    ("exi", &["application/exi"]),
    ("exp", &["application/express"]),
    ("exr", &["image/aces"]),
    ("ez", &["application/andrew-inset"]),
    ("fb", &["application/x-maker"]),
    ("fbdoc", &["application/x-maker"]),
    ("fdf", &["application/fdf"]),
    ("fdt", &["application/fdt+xml"]),
    ("fig", &["application/x-xfig"]),
    ("finf", &["application/fastinfoset"]),
    ("fit", &["image/fits"]),
    ("fits", &["image/fits"]),
    ("flac", &["audio/flac"]),
    ("fli", &["video/fli"]),
    ("flv", &["video/x-flv"]),
    ("fm", &["application/x-maker"]),
    ("frame", &["application/x-maker"]),
    ("frm", &["application/x-maker"]),
    ("fts", &["image/fits"]),
    ("gan", &["application/x-ganttproject"]),
    ("gbr", &["application/rpki-ghostbusters"]),
    ("gcd", &["text/x-pcs-gcd"]),
    ("gcf", &["application/x-graphing-calculator"]),
    ("geojson", &["application/geo+json"]),
    ("gf", &["application/x-tex-gf"]),
    ("gff3", &["text/gff3"]),
    ("gif", &["image/gif"]),
    ("gl", &["video/gl"]),
    ("glb", &["model/gltf-binary"]),
    ("glbin", &["application/gltf-buffer"]),
    ("glbuf", &["application/gltf-buffer"]),
    ("gltf", &["model/gltf+json"]),
    ("gml", &["application/gml+xml"]),
    ("gnumeric", &["application/x-gnumeric"]),
    ("gpkg", &["application/geopackage+sqlite3"]),
    ("gram", &["application/srgs"]),
    ("grxml", &["application/srgs+xml"]),
    ("gsf", &["application/x-font"]),
    ("gsheet", &["application/urc-grpsheet+xml"]),
    ("gsm", &["audio/x-gsm"]),
    ("gtar", &["application/x-gtar"]),
    ("gz", &["application/gzip"]),
    ("h", &["text/x-chdr"]),
    ("h++", &["text/x-c++hdr"]),
    ("hdf", &["application/x-hdf"]),
    ("heic", &["image/heic"]),
    ("heics", &["image/heic-sequence"]),
    ("heif", &["image/heif"]),
    ("heifs", &["image/heif-sequence"]),
    ("hej2", &["image/hej2k"]),
    ("held", &["application/atsc-held+xml"]),
    ("hh", &["text/x-c++hdr"]),
    ("hif", &["image/avif"]),
    ("hpp", &["text/x-c++hdr"]),
    ("hpub", &["application/prs.hpub+zip"]),
    ("hqx", &["application/mac-binhex40"]),
    ("hs", &["text/x-haskell"]),
    ("hsj2", &["image/hsj2"]),
    ("hta", &["application/hta"]),
    ("htc", &["text/x-component"]),
    ("htm", &["text/html"]),
    ("html", &["text/html"]),
    ("hwp", &["application/x-hwp"]),
    ("hxx", &["text/x-c++hdr"]),
    ("ica", &["application/x-ica"]),
    ("ico", &["image/x-icon"]),
    ("ics", &["text/calendar"]),
    ("ief", &["image/ief"]),
    ("ifb", &["text/calendar"]),
    ("ifc", &["application/p21"]),
    ("iges", &["model/iges"]),
    ("igs", &["model/iges"]),
    ("iii", &["application/x-iphone"]),
    ("info", &["application/x-info"]),
    ("ink", &["application/inkml+xml"]),
    ("inkml", &["application/inkml+xml"]),
    ("ins", &["application/x-internet-signup"]),
    ("ipfix", &["application/ipfix"]),
    ("iso", &["application/x-iso9660-image"]),
    ("isp", &["application/x-internet-signup"]),
    ("its", &["application/its+xml"]),
    ("jar", &["application/java-archive"]),
    ("java", &["text/x-java"]),
    ("jfif", &["image/pjpeg"]),
    ("jhc", &["image/jphc"]),
    ("jls", &["image/jls"]),
    ("jmz", &["application/x-jmol"]),
    ("jng", &["image/x-jng"]),
    ("jnlp", &["application/x-java-jnlp-file"]),
    ("jp2", &["image/jp2"]),
    ("jpe", &["image/jpeg", "image/pjpeg"]),
    ("jpeg", &["image/jpeg", "image/pjpeg"]),
    ("jpf", &["image/jpx"]),
    ("jpg", &["image/jpeg", "image/pjpeg"]),
    ("jpg2", &["image/jp2"]),
    ("jpgm", &["image/jpm"]),
    ("jph", &["image/jph"]),
    ("jphc", &["image/jphc"]),
    ("jpm", &["image/jpm"]),
    ("jpx", &["image/jpx"]),
    ("jrd", &["application/jrd+json"]),
    ("js", &["application/javascript", "text/javascript"]),
    ("json", &["application/json"]),
    ("json-patch", &["application/json-patch+json"]),
    ("jsonld", &["application/ld+json"]),
    ("jsontd", &["application/td+json"]),
    ("jsontm", &["application/tm+json"]),
    ("jt", &["model/jt"]),
    ("jxl", &["image/jxl"]),
    ("jxr", &["image/jxr"]),
    ("jxra", &["image/jxra"]),
    ("jxrs", &["image/jxrs"]),
    ("jxs", &["image/jxs"]),
    ("jxsc", &["image/jxsc"]),
    ("jxsi", &["image/jxsi"]),
    ("jxss", &["image/jxss"]),
    ("key", &["application/pgp-keys"]),
    ("kil", &["application/x-killustrator"]),
    ("ktx", &["image/ktx"]),
    ("ktx2", &["image/ktx2"]),
    ("l16", &["audio/l16"]),
    ("latex", &["application/x-latex"]),
    ("lbc", &["audio/ilbc"]),
    ("lgr", &["application/lgr+xml"]),
    ("lha", &["application/x-lha"]),
    ("lhs", &["text/x-literate-haskell"]),
    ("lin", &["application/bbolin"]),
    ("loas", &["audio/usac"]),
    ("lostsyncxml", &["application/lostsync+xml"]),
    ("lostxml", &["application/lost+xml"]),
    ("lpf", &["application/lpf+zip"]),
    ("lsf", &["video/x-la-asf"]),
    ("lsx", &["video/x-la-asf"]),
    ("ltx", &["text/x-tex"]),
    ("lxf", &["application/lxf"]),
    ("ly", &["text/x-lilypond"]),
    ("lyx", &["application/x-lyx"]),
    ("lzh", &["application/x-lzh"]),
    ("lzx", &["application/x-lzx"]),
    ("m1v", &["video/mpeg"]),
    ("m21", &["application/mp21"]),
    ("m2v", &["video/mpeg"]),
    ("m3g", &["application/m3g"]),
    ("m3u", &["audio/mpegurl"]),
    ("m4a", &["audio/mp4"]),
    ("m4s", &["video/iso.segment"]),
    ("m4v", &["video/mp4"]),
    ("ma", &["application/mathematica"]),
    ("mads", &["application/mads+xml"]),
    ("maei", &["application/mmt-aei+xml"]),
    ("mail", &["message/rfc822"]),
    ("maker", &["application/x-maker"]),
    ("man", &["application/x-troff-man"]),
    ("manifest", &["text/cache-manifest"]),
    ("markdown", &["text/markdown"]),
    ("mb", &["application/mathematica"]),
    ("mbox", &["application/mbox"]),
    ("md", &["text/markdown"]),
    ("mdb", &["application/msaccess"]),
    ("me", &["application/x-troff-me"]),
    ("mesh", &["model/mesh"]),
    ("meta4", &["application/metalink4+xml"]),
    ("mets", &["application/mets+xml"]),
    ("mf4", &["application/mf4"]),
    ("mft", &["application/rpki-manifest"]),
    ("mhas", &["audio/mhas"]),
    ("mid", &["audio/sp-midi"]),
    ("miz", &["text/mizar"]),
    ("mj2", &["video/mj2"]),
    ("mjp2", &["video/mj2"]),
    ("mjs", &["application/javascript", "text/javascript"]),
    ("mkv", &["video/x-matroska"]),
    ("mm", &["application/x-freemind"]),
    ("mml", &["application/mathml+xml"]),
    ("mng", &["video/x-mng"]),
    ("moc", &["text/x-moc"]),
    ("mod", &["application/xml-dtd"]),
    ("mods", &["application/mods+xml"]),
    ("mov", &["video/quicktime"]),
    ("movie", &["video/x-sgi-movie"]),
    ("mp1", &["audio/mpeg"]),
    ("mp2", &["audio/mpeg"]),
    ("mp21", &["application/mp21"]),
    ("mp3", &["audio/mpeg"]),
    ("mp4", &["video/mp4"]),
    ("mpd", &["application/dash+xml"]),
    ("mpdd", &["application/dashdelta"]),
    ("mpe", &["video/mpeg"]),
    ("mpeg", &["video/mpeg"]),
    ("mpega", &["audio/mpeg"]),
    ("mpg", &["video/mpeg"]),
    ("mpg4", &["video/mp4"]),
    ("mpga", &["audio/mpeg"]),
    ("mph", &["application/x-comsol"]),
    ("mpv", &["video/x-matroska"]),
    ("mrc", &["application/marc"]),
    ("mrcx", &["application/marcxml+xml"]),
    ("ms", &["application/x-troff-ms"]),
    ("msh", &["model/mesh"]),
    ("msi", &["application/x-msi"]),
    ("msp", &["application/octet-stream"]),
    ("msu", &["application/octet-stream"]),
    ("mtl", &["model/mtl"]),
    ("musd", &["application/mmt-usd+xml"]),
    ("mxf", &["application/mxf"]),
    ("mxmf", &["audio/mobile-xmf"]),
    ("mxml", &["application/xv+xml"]),
    ("n3", &["text/n3"]),
    ("nc", &["application/x-netcdf"]),
    ("nef", &["image/x-nikon-nef"]),
    ("nq", &["application/n-quads"]),
    ("nt", &["application/n-triples"]),
    ("nwc", &["application/x-nwc"]),
    ("o", &["application/x-object"]),
    ("obj", &["model/obj"]),
    ("oda", &["application/oda"]),
    ("odd", &["application/tei+xml"]),
    ("odx", &["application/odx"]),
    ("oga", &["audio/ogg"]),
    ("ogg", &["audio/ogg"]),
    ("ogv", &["video/ogg"]),
    ("ogx", &["application/ogg"]),
    ("old", &["application/x-trash"]),
    ("omg", &["audio/atrac3"]),
    ("one", &["application/onenote"]),
    ("onepkg", &["application/onenote"]),
    ("onetmp", &["application/onenote"]),
    ("onetoc2", &["application/onenote"]),
    ("opf", &["application/oebps-package+xml"]),
    ("opus", &["audio/ogg"]),
    ("orc", &["audio/csound"]),
    ("orf", &["image/x-olympus-orf"]),
    ("orq", &["application/ocsp-request"]),
    ("ors", &["application/ocsp-response"]),
    ("otf", &["font/otf"]),
    ("oxps", &["application/oxps"]),
    ("oza", &["application/x-oz-application"]),
    ("p", &["text/x-pascal"]),
    ("p10", &["application/pkcs10"]),
    ("p12", &["application/pkcs12"]),
    ("p21", &["application/p21"]),
    ("p7c", &["application/pkcs7-mime"]),
    ("p7m", &["application/pkcs7-mime"]),
    ("p7r", &["application/x-pkcs7-certreqresp"]),
    ("p7s", &["application/pkcs7-signature"]),
    ("p7z", &["application/pkcs7-mime"]),
    ("p8", &["application/pkcs8"]),
    ("p8e", &["application/pkcs8-encrypted"]),
    ("pac", &["application/x-ns-proxy-autoconfig"]),
    ("pas", &["text/x-pascal"]),
    ("pat", &["image/x-coreldrawpattern"]),
    ("patch", &["text/x-diff"]),
    ("pbm", &["image/x-portable-bitmap"]),
    ("pcf", &["application/x-font-pcf"]),
    ("pcf.z", &["application/x-font-pcf"]),
    ("pdf", &["application/pdf"]),
    ("pdx", &["application/pdx"]),
    ("pem", &["application/pem-certificate-chain"]),
    ("pfa", &["application/x-font"]),
    ("pfb", &["application/x-font"]),
    ("pfr", &["application/font-tdpfr"]),
    ("pfx", &["application/pkcs12"]),
    ("pgm", &["image/x-portable-graymap"]),
    ("pgp", &["application/pgp-encrypted"]),
    ("pk", &["application/x-tex-pk"]),
    ("pki", &["application/pkixcmp"]),
    ("pkipath", &["application/pkix-pkipath"]),
    ("pl", &["text/x-perl"]),
    ("pls", &["audio/x-scpls"]),
    ("pm", &["text/x-perl"]),
    ("png", &["image/png"]),
    ("pnm", &["image/x-portable-anymap"]),
    ("pot", &["text/plain"]),
    ("ppm", &["image/x-portable-pixmap"]),
    ("prc", &["model/prc"]),
    ("prf", &["application/pics-rules"]),
    ("provn", &["text/provenance-notation"]),
    ("provx", &["application/provenance+xml"]),
    ("ps", &["application/postscript"]),
    ("psid", &["audio/prs.sid"]),
    ("pskcxml", &["application/pskc+xml"]),
    ("pti", &["image/prs.pti"]),
    ("py", &["text/x-python"]),
    ("pyc", &["application/x-python-code"]),
    ("pyo", &["application/x-python-code"]),
    ("qcp", &["audio/evrc-qcp"]),
    ("qgs", &["application/x-qgis"]),
    ("qt", &["video/quicktime"]),
    ("qtl", &["application/x-quicktimeplayer"]),
    ("ra", &["audio/x-pn-realaudio"]),
    ("ram", &["audio/x-pn-realaudio"]),
    ("rapd", &["application/route-apd+xml"]),
    ("ras", &["image/x-cmu-raster"]),
    ("rb", &["application/x-ruby"]),
    ("rct", &["application/prs.nprend"]),
    ("rdf", &["application/rdf+xml"]),
    ("rdf-crypt", &["application/prs.rdf-xml-crypt"]),
    ("rdp", &["application/x-rdp"]),
    ("relo", &["application/p2p-overlay+xml"]),
    ("rfcxml", &["application/rfc+xml"]),
    ("rgb", &["image/x-rgb"]),
    ("rif", &["application/reginfo+xml"]),
    ("rl", &["application/resource-lists+xml"]),
    ("rld", &["application/resource-lists-diff+xml"]),
    ("rm", &["audio/x-pn-realaudio"]),
    ("rnc", &["application/relax-ng-compact-syntax"]),
    ("rnd", &["application/prs.nprend"]),
    ("roa", &["application/rpki-roa"]),
    ("roff", &["text/troff"]),
    ("rpm", &["application/x-redhat-package-manager"]),
    ("rq", &["application/sparql-query"]),
    ("rs", &["application/rls-services+xml", "text/x-rust"]),
    ("rsat", &["application/atsc-rsat+xml"]),
    ("rsheet", &["application/urc-ressheet+xml"]),
    ("rss", &["application/x-rss+xml"]),
    ("rst", &["text/prs.fallenstein.rst"]),
    ("rtf", &["application/rtf"]),
    ("rusd", &["application/route-usd+xml"]),
    ("sac", &["application/tamp-sequence-adjust-confirm"]),
    ("sarif", &["application/sarif+json"]),
    ("sarif-external-properties", &["application/sarif-external-properties+json"]),
    ("sarif-external-properties.json", &["application/sarif-external-properties+json"]),
    ("sarif.json", &["application/sarif+json"]),
    ("scala", &["text/x-scala"]),
    ("sce", &["application/x-scilab"]),
    ("sci", &["application/x-scilab"]),
    ("scim", &["application/scim+json"]),
    ("sco", &["audio/csound"]),
    ("scq", &["application/scvp-cv-request"]),
    ("scr", &["application/x-silverlight"]),
    ("scs", &["application/scvp-cv-response"]),
    ("sd2", &["audio/x-sd2"]),
    ("sdp", &["application/sdp"]),
    ("senml", &["application/senml+json"]),
    ("senml-etchc", &["application/senml-etch+cbor"]),
    ("senml-etchj", &["application/senml-etch+json"]),
    ("senmlc", &["application/senml+cbor"]),
    ("senmle", &["application/senml-exi"]),
    ("senmlx", &["application/senml+xml"]),
    ("sensml", &["application/sensml+json"]),
    ("sensmlc", &["application/sensml+cbor"]),
    ("sensmle", &["application/sensml-exi"]),
    ("sensmlx", &["application/sensml+xml"]),
    ("ser", &["application/java-serialized-object"]),
    ("sfv", &["text/x-sfv"]),
    ("sgf", &["application/x-go-sgf"]),
    ("sgm", &["text/sgml"]),
    ("sgml", &["text/sgml"]),
    ("sh", &["application/x-sh", "text/x-sh"]),
    ("shaclc", &["text/shaclc"]),
    ("shar", &["application/x-shar"]),
    ("shc", &["text/shaclc"]),
    ("shex", &["text/shex"]),
    ("shf", &["application/shf+xml"]),
    ("shp", &["application/x-qgis"]),
    ("shtml", &["text/html"]),
    ("shx", &["application/x-qgis"]),
    ("sid", &["audio/prs.sid"]),
    ("sieve", &["application/sieve"]),
    ("sig", &["application/pgp-signature"]),
    ("sik", &["application/x-trash"]),
    ("silo", &["model/mesh"]),
    ("sit", &["application/x-stuffit"]),
    ("sitx", &["application/x-stuffit"]),
    ("siv", &["application/sieve"]),
    ("sls", &["application/route-s-tsid+xml"]),
    ("smi", &["application/smil+xml"]),
    ("smil", &["application/smil+xml"]),
    ("sml", &["application/smil+xml"]),
    ("smv", &["audio/smv"]),
    ("snd", &["audio/basic"]),
    ("soa", &["text/dns"]),
    ("soc", &["application/sgml-open-catalog"]),
    ("sofa", &["audio/sofa"]),
    ("spdx", &["text/spdx"]),
    ("spdx.json", &["application/spdx+json"]),
    ("spl", &["application/futuresplash"]),
    ("spp", &["application/scvp-vp-response"]),
    ("spq", &["application/scvp-vp-request"]),
    ("spx", &["audio/ogg"]),
    ("sql", &["application/sql"]),
    ("src", &["application/x-wais-source"]),
    ("srt", &["text/plain"]),
    ("sru", &["application/sru+xml"]),
    ("srx", &["application/sparql-results+xml"]),
    ("ssml", &["application/ssml+xml"]),
    ("step", &["model/step"]),
    ("stix", &["application/stix+json"]),
    ("stk", &["application/hyperstudio"]),
    ("stl", &["model/stl"]),
    ("stp", &["model/step"]),
    ("stpnc", &["application/p21"]),
    ("stpx", &["model/step+xml"]),
    ("stpxz", &["model/step-xml+zip"]),
    ("stpz", &["model/step+zip"]),
    ("sty", &["text/x-tex"]),
    ("sv4cpio", &["application/x-sv4cpio"]),
    ("sv4crc", &["application/x-sv4crc"]),
    ("svg", &["image/svg+xml"]),
    ("svgz", &["image/svg+xml"]),
    ("swidtag", &["application/swid+xml"]),
    ("t", &["text/troff"]),
    ("tag", &["text/prs.lines.tag"]),
    ("tar", &["application/x-tar"]),
    ("tau", &["application/tamp-apex-update"]),
    ("taz", &["application/x-gtar-compressed"]),
    ("tcl", &["application/x-tcl", "text/x-tcl"]),
    ("tcu", &["application/tamp-community-update"]),
    ("td", &["application/urc-targetdesc+xml"]),
    ("tei", &["application/tei+xml"]),
    ("teicorpus", &["application/tei+xml"]),
    ("ter", &["application/tamp-error"]),
    ("tex", &["text/x-tex"]),
    ("texi", &["application/x-texinfo"]),
    ("texinfo", &["application/x-texinfo"]),
    ("text", &["text/plain"]),
    ("tfi", &["application/thraud+xml"]),
    ("tfx", &["image/tiff-fx"]),
    ("tgz", &["application/x-gtar-compressed"]),
    ("tif", &["image/tiff"]),
    ("tiff", &["image/tiff"]),
    ("tk", &["text/x-tcl"]),
    ("tm", &["text/texmacs"]),
    ("tm.json", &["application/tm+json"]),
    ("tm.jsonld", &["application/tm+json"]),
    ("toml", &["application/toml"]),
    ("torrent", &["application/x-bittorrent"]),
    ("tr", &["text/troff"]),
    ("trig", &["application/trig"]),
    ("tsa", &["application/tamp-sequence-adjust"]),
    ("tsd", &["application/timestamped-data"]),
    ("tsp", &["application/dsptype"]),
    ("tsq", &["application/timestamp-query"]),
    ("tsr", &["application/timestamp-reply"]),
    ("tsv", &["text/tab-separated-values"]),
    ("ttc", &["font/collection"]),
    ("ttf", &["font/ttf"]),
    ("ttl", &["text/turtle"]),
    ("ttml", &["application/ttml+xml"]),
    ("tuc", &["application/tamp-update-confirm"]),
    ("tur", &["application/tamp-update"]),
    ("txt", &["text/plain"]),
    ("u3d", &["model/u3d"]),
    ("u8dsn", &["message/global-delivery-status"]),
    ("u8hdr", &["message/global-headers"]),
    ("u8mdn", &["message/global-disposition-notification"]),
    ("u8msg", &["message/global"]),
    ("uis", &["application/urc-uisocketdesc+xml"]),
    ("uri", &["text/uri-list"]),
    ("uris", &["text/uri-list"]),
    ("ustar", &["application/x-ustar"]),
    ("vcard", &["text/vcard"]),
    ("vcd", &["application/x-cdlink"]),
    ("vcf", &["text/vcard"]),
    ("vcj", &["application/voucher-cms+json"]),
    ("vcs", &["text/x-vcalendar"]),
    ("vpm", &["multipart/voice-message"]),
    ("vrm", &["model/vrml"]),
    ("vrml", &["model/vrml"]),
    ("vtt", &["text/vtt"]),
    ("vxml", &["application/voicexml+xml"]),
    ("wad", &["application/x-doom"]),
    ("wasm", &["application/wasm"]),
    ("wav", &["audio/x-wav"]),
    ("wax", &["audio/x-ms-wax"]),
    ("webm", &["video/webm"]),
    ("webmanifest", &["application/manifest+json"]),
    ("webp", &["image/webp"]),
    ("wgsl", &["text/wgsl"]),
    ("wgt", &["application/widget"]),
    ("wif", &["application/watcherinfo+xml"]),
    ("wk", &["application/x-123"]),
    ("wlnk", &["application/link-format"]),
    ("wm", &["video/x-ms-wm"]),
    ("wma", &["audio/x-ms-wma"]),
    ("wmd", &["application/x-ms-wmd"]),
    ("wmf", &["image/wmf"]),
    ("wmv", &["video/x-ms-wmv"]),
    ("wmx", &["video/x-ms-wmx"]),
    ("wmz", &["application/x-ms-wmz"]),
    ("woff", &["font/woff"]),
    ("woff2", &["font/woff2"]),
    ("wrl", &["model/vrml"]),
    ("wsdl", &["application/wsdl+xml"]),
    ("wspolicy", &["application/wspolicy+xml"]),
    ("wvx", &["video/x-ms-wvx"]),
    ("wz", &["application/x-wingz"]),
    ("x3d", &["model/x3d+xml"]),
    ("x3db", &["model/x3d+fastinfoset"]),
    ("x3dv", &["model/x3d-vrml"]),
    ("x3dvz", &["model/x3d-vrml"]),
    ("x3dz", &["model/x3d+xml"]),
    ("xav", &["application/xcap-att+xml"]),
    ("xbm", &["image/x-xbitmap"]),
    ("xca", &["application/xcap-caps+xml"]),
    ("xcf", &["image/x-xcf"]),
    ("xcos", &["application/x-scilab-xcos"]),
    ("xcs", &["application/calendar+xml"]),
    ("xdd", &["application/bacnet-xdd+zip"]),
    ("xdf", &["application/xcap-diff+xml"]),
    ("xdssc", &["application/dssc+xml"]),
    ("xel", &["application/xcap-el+xml"]),
    ("xer", &["application/xcap-error+xml"]),
    ("xfdf", &["application/xfdf"]),
    ("xhe", &["audio/usac"]),
    ("xht", &["application/xhtml+xml"]),
    ("xhtm", &["application/xhtml+xml"]),
    ("xhtml", &["application/xhtml+xml"]),
    ("xhvml", &["application/xv+xml"]),
    ("xlf", &["application/xliff+xml"]),
    ("xml", &["application/xml"]),
    ("xmls", &["application/dskpp+xml"]),
    ("xns", &["application/xcap-ns+xml"]),
    ("xop", &["application/xop+xml"]),
    ("xpi", &["application/x-xpinstall"]),
    ("xpm", &["image/x-xpixmap"]),
    ("xsf", &["application/prs.xsf+xml"]),
    ("xsl", &["application/xslt+xml"]),
    ("xslt", &["application/xslt+xml"]),
    ("xspf", &["application/xspf+xml"]),
    ("xvm", &["application/xv+xml"]),
    ("xvml", &["application/xv+xml"]),
    ("xwd", &["image/x-xwindowdump"]),
    ("xz", &["application/x-xz"]),
    ("yang", &["application/yang"]),
    ("yin", &["application/yin+xml"]),
    ("zip", &["application/zip"]),
    ("zone", &["text/dns"]),
    ("zst", &["application/zstd"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted(table: &[(&str, &[&str])]) {
        for pair in table.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn tables_are_sorted_and_unique() {
        assert_sorted(EXTENSIONS);
        assert_sorted(MIME_TYPES);
    }

    #[test]
    fn keys_are_normalized() {
        for (key, values) in EXTENSIONS.iter().chain(MIME_TYPES) {
            assert_eq!(*key, key.trim().to_ascii_lowercase());
            assert!(!values.is_empty(), "{key} has no values");
        }
    }

    #[test]
    fn reverse_table_is_the_inversion() {
        for (mime_type, extensions) in EXTENSIONS {
            for extension in *extensions {
                let mime_types = mime_types(extension).unwrap();
                assert!(mime_types.contains(mime_type), "{extension} -> {mime_type}");
            }
        }
        for (extension, mime_types) in MIME_TYPES {
            for mime_type in *mime_types {
                assert!(extensions(mime_type).unwrap().contains(extension));
            }
        }
    }

    #[test]
    fn exact_lookups() {
        assert_eq!(extensions("application/json"), Some(&["json"][..]));
        assert_eq!(mime_types("png"), Some(&["image/png"][..]));
        assert_eq!(extensions("not/found"), None);
        assert_eq!(mime_types(" png"), None);
    }
}
