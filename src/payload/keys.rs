//! Placeholder names the receipt template declares.
//!
//! Assembled payloads are guaranteed to carry every key in [`ALL`];
//! extra keys in a template are the template author's concern.

pub const MES_REFERENCIA: &str = "MES_REFERENCIA";
pub const MES_REFERENCIA_CURTO: &str = "MES_REFERENCIA_CURTO";
pub const DATA_EMISSAO: &str = "DATA_EMISSAO";
pub const LOCAL_EMISSAO: &str = "LOCAL_EMISSAO";
pub const LOCALIDADE: &str = "LOCALIDADE";

pub const NOME_CONDOMINIO: &str = "NOME_CONDOMINIO";
pub const CNPJ_CONDOMINIO: &str = "CNPJ_CONDOMINIO";
pub const GRUPO_DE_SALDO: &str = "GRUPO_DE_SALDO";
pub const CONTA_GRUPO_DE_SALDO: &str = "CONTA_GRUPO_DE_SALDO";

pub const VALOR_BRUTO: &str = "VALOR_BRUTO";
pub const VALOR_INSS: &str = "VALOR_INSS";
pub const VALOR_LIQUIDO: &str = "VALOR_LIQUIDO";
pub const VALOR_BRUTO_NUMERICO: &str = "VALOR_BRUTO_NUMERICO";
pub const VALOR_INSS_NUMERICO: &str = "VALOR_INSS_NUMERICO";
pub const VALOR_LIQUIDO_NUMERICO: &str = "VALOR_LIQUIDO_NUMERICO";
pub const VALOR_BRUTO_POR_EXTENSO: &str = "VALOR_BRUTO_POR_EXTENSO";
pub const VALOR_LIQUIDO_POR_EXTENSO: &str = "VALOR_LIQUIDO_POR_EXTENSO";
pub const VALOR_LIQUIDO_FORMATADO: &str = "VALOR_LIQUIDO_FORMATADO";

pub const NOME_PRESTADOR: &str = "NOME_PRESTADOR";
pub const CPF_PRESTADOR: &str = "CPF_PRESTADOR";
pub const PIS: &str = "PIS";

pub const CODIGO_BANCO: &str = "CODIGO_BANCO";
pub const NOME_BANCO: &str = "NOME_BANCO";
pub const AGENCIA: &str = "AGENCIA";
pub const CONTA: &str = "CONTA";
pub const CHAVE_PIX: &str = "CHAVE_PIX";
pub const TIPO_CHAVE_PIX: &str = "TIPO_CHAVE_PIX";

pub const DESCRICAO_SERVICO: &str = "DESCRICAO_SERVICO";
pub const TIPO_SERVICO_PRESTADO: &str = "TIPO_SERVICO_PRESTADO";
pub const RETENCAO_VALOR: &str = "RETENCAO_VALOR";

pub const DATA_VENCIMENTO: &str = "DATA_VENCIMENTO";
pub const PARCELA: &str = "PARCELA";

pub const LOGO_BASE64: &str = "LOGO_BASE64";
pub const LOGO_STYLE: &str = "LOGO_STYLE";
pub const QR_CODE_BASE64: &str = "QR_CODE_BASE64";
pub const QR_CODE_STYLE: &str = "QR_CODE_STYLE";

/// Every placeholder an assembled payload carries.
pub const ALL: &[&str] = &[
    MES_REFERENCIA,
    MES_REFERENCIA_CURTO,
    DATA_EMISSAO,
    LOCAL_EMISSAO,
    LOCALIDADE,
    NOME_CONDOMINIO,
    CNPJ_CONDOMINIO,
    GRUPO_DE_SALDO,
    CONTA_GRUPO_DE_SALDO,
    VALOR_BRUTO,
    VALOR_INSS,
    VALOR_LIQUIDO,
    VALOR_BRUTO_NUMERICO,
    VALOR_INSS_NUMERICO,
    VALOR_LIQUIDO_NUMERICO,
    VALOR_BRUTO_POR_EXTENSO,
    VALOR_LIQUIDO_POR_EXTENSO,
    VALOR_LIQUIDO_FORMATADO,
    NOME_PRESTADOR,
    CPF_PRESTADOR,
    PIS,
    CODIGO_BANCO,
    NOME_BANCO,
    AGENCIA,
    CONTA,
    CHAVE_PIX,
    TIPO_CHAVE_PIX,
    DESCRICAO_SERVICO,
    TIPO_SERVICO_PRESTADO,
    RETENCAO_VALOR,
    DATA_VENCIMENTO,
    PARCELA,
    LOGO_BASE64,
    LOGO_STYLE,
    QR_CODE_BASE64,
    QR_CODE_STYLE,
];
