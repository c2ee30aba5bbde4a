pub mod u001_form_bancario;
